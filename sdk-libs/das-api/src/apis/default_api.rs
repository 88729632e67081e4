use super::{Configuration, Error};
use crate::models::{Asset, AssetIdParams, AssetProof, JsonRpcRequest, JsonRpcResponse};

pub const JSONRPC_VERSION: &str = "2.0";
pub const REQUEST_ID: &str = "cnft-demo";

pub fn make_get_asset_body(id: &str) -> JsonRpcRequest {
    JsonRpcRequest::new("getAsset", AssetIdParams::new(id.to_string()))
}

pub fn make_get_asset_proof_body(id: &str) -> JsonRpcRequest {
    JsonRpcRequest::new("getAssetProof", AssetIdParams::new(id.to_string()))
}

macro_rules! api_call {
    ($fn_name:ident, $body_fn:ident, $result_type:ty) => {
        pub async fn $fn_name(
            configuration: &Configuration,
            id: &str,
        ) -> Result<$result_type, Error<$result_type>> {
            let url = configuration.build_url();
            let body = $body_fn(id);
            let response = configuration
                .client
                .post(&url)
                .header(reqwest::header::ACCEPT, "application/json")
                .json(&body)
                .send()
                .await
                .map_err(Error::Reqwest)?;

            let status = response.status().as_u16();
            if status != 200 {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::ResponseError { status, body });
            }
            let envelope = response
                .json::<JsonRpcResponse<$result_type>>()
                .await
                .map_err(Error::Reqwest)?;
            match (envelope.result, envelope.error) {
                (_, Some(error)) => Err(Error::JsonRpc(error)),
                (Some(result), None) => Ok(result),
                (None, None) => Err(Error::MissingResult),
            }
        }
    };
}

api_call!(get_asset_post, make_get_asset_body, Asset);
api_call!(get_asset_proof_post, make_get_asset_proof_body, AssetProof);

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{body_partial_json, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    const ASSET_ID: &str = "8Bvt8yUFrYMNcSQ4RJvcr4vm2N1ZAmhULJKjNDRT7GnK";
    const TREE: &str = "6MfcG9Ct8Vr4QD2CaiBaJMkjvSUJLAkTtJgdDc4YfBs5";

    fn asset_json(burnt: bool) -> serde_json::Value {
        json!({
            "interface": "V1_NFT",
            "id": ASSET_ID,
            "content": {
                "$schema": "https://schema.metaplex.com/nft1.0.json",
                "json_uri": "https://example.com/1.json",
                "files": [],
                "metadata": { "name": "cNFT #1", "symbol": "CNFT" },
                "links": {}
            },
            "authorities": [],
            "compression": {
                "eligible": false,
                "compressed": true,
                "data_hash": "4ZFBL1NxUkXmRmhXVYeyeADVLSByv4Qo9JEK9MYJ4sHK",
                "creator_hash": "EAD7zZWfR8nYVUWBNUwUhPuAYnVUDmVf9NcUeGrzbCB4",
                "asset_hash": "2W7gxNUhfe5MXfbJbnLJ3hzb2kHWZi9b1MEVVQCdgaKW",
                "tree": TREE,
                "seq": 2,
                "leaf_id": 1
            },
            "grouping": [],
            "royalty": { "royalty_model": "creators", "basis_points": 500 },
            "creators": [
                { "address": TREE, "share": 100, "verified": false }
            ],
            "ownership": {
                "frozen": false,
                "delegated": false,
                "delegate": null,
                "ownership_model": "single",
                "owner": TREE
            },
            "supply": null,
            "mutable": true,
            "burnt": burnt
        })
    }

    #[test]
    fn test_make_get_asset_body() {
        let body = make_get_asset_body(ASSET_ID);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["id"], "cnft-demo");
        assert_eq!(json["method"], "getAsset");
        assert_eq!(json["params"]["id"], ASSET_ID);

        let json = serde_json::to_value(make_get_asset_proof_body(ASSET_ID)).unwrap();
        assert_eq!(json["method"], "getAssetProof");
    }

    #[tokio::test]
    async fn test_get_asset() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(query_param("api-key", "TEST_KEY"))
            .and(header("accept", "application/json"))
            .and(body_partial_json(json!({
                "method": "getAsset",
                "params": { "id": ASSET_ID }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "result": asset_json(false),
                "id": "cnft-demo"
            })))
            .mount(&mock_server)
            .await;

        let config = Configuration::new(format!("{}/?api-key=TEST_KEY", mock_server.uri()));
        let asset = get_asset_post(&config, ASSET_ID).await.unwrap();
        assert_eq!(asset.id, ASSET_ID);
        assert!(!asset.burnt);
        assert_eq!(asset.ownership.owner, TREE);
        assert_eq!(asset.ownership.delegate, None);
        let compression = asset.compression.unwrap();
        assert!(compression.compressed);
        assert_eq!(compression.tree, TREE);
        assert_eq!(compression.leaf_id, 1);
        assert_eq!(asset.creators[0].share, 100);
        assert_eq!(asset.content.unwrap().metadata.unwrap().name, "cNFT #1");
    }

    #[tokio::test]
    async fn test_get_asset_proof() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "method": "getAssetProof" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "result": {
                    "root": "2o6Y6EiY3WXhoaEpei2pHmHLYnHDcEQVhgD89GrGHDBH",
                    "proof": [
                        "EmJXiXEAhEN3FfNQtBa5hwR8LC5kHvdLsaGCoERosZjK",
                        "7NEfhcNPAwbw3L87fjsPqTz2fQdd1CjoLE138SD58FDQ"
                    ],
                    "node_index": 16385,
                    "leaf": "6YdZXw49M97mfFTwgQb6kxM2c6eqZkHSaW9XhhoZXtzv",
                    "tree_id": TREE
                },
                "id": "cnft-demo"
            })))
            .mount(&mock_server)
            .await;

        let config = Configuration::new(mock_server.uri());
        let proof = get_asset_proof_post(&config, ASSET_ID).await.unwrap();
        assert_eq!(proof.proof.len(), 2);
        assert_eq!(proof.node_index, 16385);
        assert_eq!(proof.tree_id, TREE);
    }

    #[tokio::test]
    async fn test_json_rpc_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "error": { "code": -32000, "message": "Asset Not Found" },
                "id": "cnft-demo"
            })))
            .mount(&mock_server)
            .await;

        let config = Configuration::new(mock_server.uri());
        match get_asset_post(&config, ASSET_ID).await {
            Err(Error::JsonRpc(error)) => {
                assert_eq!(error.code, -32000);
                assert_eq!(error.message, "Asset Not Found");
            }
            other => panic!("Expected JsonRpc error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_result() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "jsonrpc": "2.0", "id": "cnft-demo" })),
            )
            .mount(&mock_server)
            .await;

        let config = Configuration::new(mock_server.uri());
        assert!(matches!(
            get_asset_proof_post(&config, ASSET_ID).await,
            Err(Error::MissingResult)
        ));
    }

    #[tokio::test]
    async fn test_error_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let config = Configuration::new(mock_server.uri());
        match get_asset_post(&config, ASSET_ID).await {
            Err(Error::ResponseError { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "Internal Server Error");
            }
            other => panic!("Expected ResponseError, got {:?}", other),
        }
    }
}
