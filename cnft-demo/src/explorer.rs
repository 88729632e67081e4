use solana_sdk::{pubkey::Pubkey, signature::Signature};
use tracing::info;
use url::Url;

pub const EXPLORER_URL: &str = "https://explorer.solana.com";
const API_KEY_PARAM: &str = "api-key";

/// Cluster the explorer has to look at to find our transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cluster {
    MainnetBeta,
    Devnet,
    Testnet,
    /// Any other RPC endpoint, e.g. a local validator.
    Custom(String),
}

impl Cluster {
    /// Custom endpoints keep their URL minus any `api-key` parameter.
    pub fn from_rpc_url(rpc_url: &str) -> Self {
        let url = match Url::parse(rpc_url) {
            Ok(url) => url,
            Err(_) => return Cluster::Custom(rpc_url.to_string()),
        };
        let host = url.host_str().map(str::to_lowercase).unwrap_or_default();
        if host.contains("devnet") {
            Cluster::Devnet
        } else if host.contains("testnet") {
            Cluster::Testnet
        } else if host.contains("mainnet") {
            Cluster::MainnetBeta
        } else {
            Cluster::Custom(without_api_key(url, rpc_url))
        }
    }

    fn query(&self) -> Option<String> {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        match self {
            Cluster::MainnetBeta => return None,
            Cluster::Devnet => query.append_pair("cluster", "devnet"),
            Cluster::Testnet => query.append_pair("cluster", "testnet"),
            Cluster::Custom(rpc_url) => query
                .append_pair("cluster", "custom")
                .append_pair("customUrl", rpc_url),
        };
        Some(query.finish())
    }

    fn url(&self, path: &str) -> String {
        match self.query() {
            Some(query) => format!("{}/{}?{}", EXPLORER_URL, path, query),
            None => format!("{}/{}", EXPLORER_URL, path),
        }
    }

    pub fn transaction_url(&self, signature: &Signature) -> String {
        self.url(&format!("tx/{}", signature))
    }

    pub fn address_url(&self, address: &Pubkey) -> String {
        self.url(&format!("address/{}", address))
    }
}

fn without_api_key(mut url: Url, original: &str) -> String {
    if !url.query_pairs().any(|(name, _)| name == API_KEY_PARAM) {
        return original.to_string();
    }
    let params: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != API_KEY_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    url.set_query(None);
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    url.into()
}

/// Prints a confirmed transaction with its explorer link.
pub fn print_transaction(cluster: &Cluster, label: &str, signature: &Signature) {
    info!("{}: {}", label, signature);
    println!("{}: {}", label, cluster.transaction_url(signature));
}
