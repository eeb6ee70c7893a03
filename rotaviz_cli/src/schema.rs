use rotaviz_service::model::application_state::ApplicationState;
use schemars::schema_for;

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(ApplicationState))
}

pub fn run() -> anyhow::Result<()> {
    println!("{}", generate_json_schema()?);
    Ok(())
}
