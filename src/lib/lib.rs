mod connection;
mod dump;
mod envfile;
mod runner;
mod utils;

pub use connection::{parse_database_url, ConnectionParams};

pub async fn dump_schema(
    env_file: String,
    output_file: String,
    image: String,
) -> anyhow::Result<()> {
    dump::dump(env_file, output_file, image).await
}
