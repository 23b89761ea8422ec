#![deny(warnings)]

use anyhow::anyhow;
use clap::{Arg, Command, crate_authors, crate_description, crate_version};
use discovery_params::{DiscoveryParams, config::RawConfig};
use serde_json::json;
use std::{collections::BTreeMap, env};
use tracing::info;
use url::Url;

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    if env::var("RUST_LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().json().flatten_event(true).init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let matches = Command::new("Discovery parameters decoder")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("CONFIG")
                .env("DISCOVERY_PARAMS_CONFIG")
                .short('c')
                .long("config")
                .default_value("discovery.toml")
                .help("Path to the application configuration file."),
        )
        .arg(
            Arg::new("URI")
                .required(true)
                .help("Discovery URI to decode, e.g. `https://www.kickstarter.com/discover/categories/art?sort=newest`."),
        )
        .get_matches();

    let raw_config = RawConfig::read_from_file(
        matches
            .get_one::<String>("CONFIG")
            .ok_or_else(|| anyhow!("<CONFIG> argument is not provided."))?,
    )?;

    info!("Discovery raw configuration: {raw_config:?}.");

    let url = Url::parse(
        matches
            .get_one::<String>("URI")
            .ok_or_else(|| anyhow!("<URI> argument is not provided."))?,
    )?;

    let paths = raw_config.discovery.paths()?;
    let params =
        DiscoveryParams::from_url_with_builder(&url, &paths, raw_config.discovery.builder());
    info!(params = ?params.log_context(), "Decoded discovery URI ({url}).");

    let query_params = params
        .query_params()
        .into_iter()
        .collect::<BTreeMap<_, _>>();
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "params": &params,
            "queryParams": query_params,
            "filter": params.filter_label(),
            "nextPage": params.next_page().to_string(),
        }))?
    );

    Ok(())
}
