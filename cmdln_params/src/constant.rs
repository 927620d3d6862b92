/// The token which conventionally ends a list of positional values (ex: `git diff HEAD -- src/`).
pub const DEFAULT_SENTINEL: &str = "--";
