//! AWS `ip-ranges.json` feed parsing.

use serde::Deserialize;
use std::error::Error;

/// Top-level structure of the AWS ip-ranges document.
#[derive(Deserialize, Debug)]
pub struct AwsIpRanges {
    /// Publication token, e.g. `"1759777069"`.
    #[serde(rename = "syncToken")]
    pub sync_token: Option<String>,
    /// Publication date, e.g. `"2025-10-06-19-37-49"`.
    #[serde(rename = "createDate")]
    pub create_date: Option<String>,
    /// IPv4 prefix records.
    #[serde(default)]
    pub prefixes: Vec<AwsPrefix>,
}

/// One IPv4 prefix record. The region/service columns are not needed here
/// and are left to serde's unknown-field handling.
#[derive(Deserialize, Debug)]
pub struct AwsPrefix {
    /// The CIDR block, e.g. `"3.5.140.0/22"`.
    pub ip_prefix: Option<String>,
}

/// Parse the AWS ip-ranges JSON document into CIDR entries.
///
/// Only the `prefixes` table is read; the `ipv6_prefixes` table is ignored.
/// Entries keep the document's order.
pub fn parse_aws_json(content: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    let ranges: AwsIpRanges =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            format!(
                "Error parsing AWS ip-ranges JSON: path={} error={}",
                e.path(),
                e
            )
        })?;

    log::info!(
        "AWS feed syncToken={sync_token:?} createDate={create_date:?} prefixes={count}",
        sync_token = ranges.sync_token,
        create_date = ranges.create_date,
        count = ranges.prefixes.len()
    );

    Ok(ranges
        .prefixes
        .into_iter()
        .filter_map(|prefix| prefix.ip_prefix)
        .collect())
}
