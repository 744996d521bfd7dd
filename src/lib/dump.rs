use crate::connection::{self, ConnectionParams};
use crate::envfile;
use crate::runner::{CommandRunner, CommandSpec, ProcessRunner};
use crate::utils;
use anyhow::{bail, Result};
use log::info;
use std::fs;
use std::path::Path;

pub async fn dump(env_file: String, output_file: String, image: String) -> Result<()> {
    dump_with_runner(&ProcessRunner, &env_file, &output_file, &image).await
}

pub(crate) async fn dump_with_runner(
    runner: &dyn CommandRunner,
    env_file: &str,
    output_file: &str,
    image: &str,
) -> Result<()> {
    let env_vars = envfile::load(Path::new(env_file))?;

    let database_url = match env_vars.get("DATABASE_URL") {
        Some(url) => url.clone(),
        None => bail!("DATABASE_URL not found in {}", env_file),
    };

    let params = connection::parse_database_url(&database_url)?;

    info!("Dumping schema from database: {}", params.database);
    info!("Host: {}:{}", params.host, params.port);
    info!("Output file: {}", output_file);

    let schema = capture_schema(runner, &params, image).await?;

    utils::write_to_schema_file(&schema, Path::new(output_file))?;

    let file_size = fs::metadata(output_file)?.len();
    info!("Schema dumped to {} ({} bytes)", output_file, file_size);

    Ok(())
}

// Runs pg_dump inside the given image on the host network so a database on
// localhost is reachable from the container. The password travels into the
// container through PGPASSWORD, an empty string when the URL carries none.
pub fn pg_dump_command(params: &ConnectionParams, image: &str) -> CommandSpec {
    CommandSpec {
        program: "docker".to_string(),
        args: vec![
            "run".to_string(),
            "--rm".to_string(),
            "--network".to_string(),
            "host".to_string(),
            "-e".to_string(),
            format!("PGPASSWORD={}", params.password.clone().unwrap_or_default()),
            image.to_string(),
            "pg_dump".to_string(),
            "--host".to_string(),
            params.host.clone(),
            "--port".to_string(),
            params.port.to_string(),
            "--username".to_string(),
            params.user.clone(),
            "--dbname".to_string(),
            params.database.clone(),
            "--schema-only".to_string(),
            "--no-owner".to_string(),
            "--no-privileges".to_string(),
        ],
    }
}

async fn capture_schema(
    runner: &dyn CommandRunner,
    params: &ConnectionParams,
    image: &str,
) -> Result<String> {
    let output = runner.run(pg_dump_command(params, image)).await?;

    if !output.success {
        bail!("pg_dump failed: {}", String::from_utf8_lossy(&output.stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
