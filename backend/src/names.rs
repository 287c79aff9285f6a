//! Display-name configuration.
//!
//! The mapping from steam id to display name is plain JSON configuration
//! (`{"STEAM_0:0:123": "Alice", ...}`) supplied by the operator; the engine
//! falls back to raw ids for anything not listed.

pub type NameTable = std::collections::HashMap<String, String>;

pub async fn load<P>(path: P) -> Result<NameTable, std::io::Error>
where
    P: AsRef<std::path::Path>,
{
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let table: NameTable = serde_json::from_str(&content)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    tracing::info!("Loaded {} display names from {:?}", table.len(), path.as_ref());
    Ok(table)
}
