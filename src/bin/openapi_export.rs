// Prints the OpenAPI document to stdout: cargo run --bin openapi_export > openapi.json

use shopkart::api::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let json = ApiDoc::openapi().to_pretty_json()?;
    println!("{}", json);
    Ok(())
}
