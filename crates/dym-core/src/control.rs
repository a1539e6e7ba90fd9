//! Control-path query parsing
//!
//! Override updates arrive as ordinary requests to a reserved sentinel
//! hostname carrying `blacklist=<host>` and/or `whitelist=<host>` query
//! parameters. The host routes such requests here instead of calling
//! `decide` on them.

use crate::engine::OverrideKind;

/// Default sentinel hostname recognized as the control endpoint.
pub const DEFAULT_SENTINEL_HOST: &str = "mitm.it";

/// One override update extracted from a control request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideCommand {
    /// Host the override applies to, exactly as given in the query.
    pub host: String,
    /// Whitelist or blacklist.
    pub kind: OverrideKind,
}

/// Extract override commands from a raw query string.
///
/// At most one `blacklist` and one `whitelist` parameter are honored; the
/// first occurrence of each key wins, an empty value disables the key, and
/// a blacklist command is ordered before a whitelist command. Values are
/// taken verbatim; any unescaping is the host's concern.
pub fn parse_query(query: &str) -> Vec<OverrideCommand> {
    let mut commands = Vec::with_capacity(2);

    if let Some(host) = first_param(query, "blacklist") {
        commands.push(OverrideCommand {
            host,
            kind: OverrideKind::Blacklist,
        });
    }
    if let Some(host) = first_param(query, "whitelist") {
        commands.push(OverrideCommand {
            host,
            kind: OverrideKind::Whitelist,
        });
    }

    commands
}

fn first_param(query: &str, name: &str) -> Option<String> {
    let value = query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })?;

    (!value.is_empty()).then(|| value.to_string())
}
