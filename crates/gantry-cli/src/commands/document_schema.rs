use gantry_schema::document_json_schema;

/// Handle `gantry document-schema`.
pub fn handle() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&document_json_schema())?);
    Ok(())
}
