pub const GENEGRAPH_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_cli_text() -> String {
    format!(
        "genegraph {}\nGraphQL API over in-memory gene and mutation records",
        GENEGRAPH_VERSION
    )
}
