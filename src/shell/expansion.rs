use crate::core::env::EnvTable;

/// Cap on substitutions per line, so values that expand to themselves stop.
pub const MAX_SUBSTITUTIONS: usize = 1024;

/// Values `$$` and `$?` expand to.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionContext {
    pub pid: u32,
    pub last_status: i32,
}

/// Rewrites `$$`, `$?` and `$NAME` left to right.
///
/// A name runs up to the next `$`, space or end of line; unknown names
/// expand to nothing. Scanning resumes at the start of each substituted
/// value, so a value may itself be expanded.
pub fn expand_variables(line: &str, env: &EnvTable, ctx: ExpansionContext) -> String {
    let mut result = line.to_string();
    let mut pos = 0;
    let mut substitutions = 0;

    while let Some(offset) = result[pos..].find('$') {
        let start = pos + offset;
        let rest = &result[start + 1..];

        let (value, end) = match rest.chars().next() {
            None | Some(' ') => {
                pos = start + 1;
                continue;
            }
            Some('$') => (ctx.pid.to_string(), start + 2),
            Some('?') => (ctx.last_status.to_string(), start + 2),
            Some(_) => {
                let len = rest.find(|c: char| c == '$' || c == ' ').unwrap_or(rest.len());
                let name = &rest[..len];
                let value = env.get_lossy(name).unwrap_or_default().into_owned();
                (value, start + 1 + len)
            }
        };

        if substitutions == MAX_SUBSTITUTIONS {
            log::warn!("stopped expanding after {} substitutions", MAX_SUBSTITUTIONS);
            break;
        }
        substitutions += 1;

        result.replace_range(start..end, &value);
        pos = start;
    }

    result
}
