use base64::{Engine, engine::general_purpose};
use crypto_box::SecretKey;
use crypto_box::aead::OsRng;
use gh_secret_seal::batch::EncryptedSecret;
use gh_secret_seal::errors::GitHubError;
use gh_secret_seal::github::{GitHubClient, RepositoryPublicKey};
use octocrab::Octocrab;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(mock_server: &MockServer) -> GitHubClient {
    let octocrab = Octocrab::builder()
        .personal_token("test-token".to_string())
        .base_uri(mock_server.uri())
        .unwrap()
        .build()
        .unwrap();

    GitHubClient::with_octocrab(octocrab, "owner".to_string(), "repo".to_string())
}

fn sealed_secret(name: &str, public_key: &RepositoryPublicKey, value: &str) -> EncryptedSecret {
    EncryptedSecret::seal(name, public_key, value.as_bytes()).unwrap()
}

#[tokio::test]
async fn test_get_public_key_success() {
    let mock_server = MockServer::start().await;

    let secret_key = SecretKey::generate(&mut OsRng);
    let public_key_b64 = general_purpose::STANDARD.encode(secret_key.public_key().as_bytes());
    let pk_body = format!(r#"{{"key_id":"test-key-id","key":"{}"}}"#, public_key_b64);

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/actions/secrets/public-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(pk_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let key = client_for(&mock_server).get_public_key().await.unwrap();
    assert_eq!(
        key,
        RepositoryPublicKey {
            key_id: "test-key-id".to_string(),
            key: public_key_b64,
        }
    );
}

#[tokio::test]
async fn test_get_public_key_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/actions/secrets/public-key"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#,
        ))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).get_public_key().await.unwrap_err();
    match err {
        GitHubError::ApiError {
            status_code,
            message,
            ..
        } => {
            assert_eq!(status_code, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_put_secret_created_201() {
    let mock_server = MockServer::start().await;

    let secret_key = SecretKey::generate(&mut OsRng);
    let public_key = RepositoryPublicKey {
        key_id: "test-key-id".to_string(),
        key: general_purpose::STANDARD.encode(secret_key.public_key().as_bytes()),
    };

    Mock::given(method("PUT"))
        .and(path("/repos/owner/repo/actions/secrets/MY_SECRET"))
        .and(body_partial_json(serde_json::json!({ "key_id": "test-key-id" })))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let secret = sealed_secret("MY_SECRET", &public_key, "supersecret");
    client_for(&mock_server).put_secret(&secret).await.unwrap();

    // The body on the wire opens with the recipient's private key.
    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let sealed = general_purpose::STANDARD
        .decode(body["encrypted_value"].as_str().unwrap())
        .unwrap();
    assert_eq!(secret_key.unseal(&sealed).unwrap(), b"supersecret");
}

#[tokio::test]
async fn test_put_secret_updated_204() {
    let mock_server = MockServer::start().await;

    let secret_key = SecretKey::generate(&mut OsRng);
    let public_key = RepositoryPublicKey {
        key_id: "test-key-id".to_string(),
        key: general_purpose::STANDARD.encode(secret_key.public_key().as_bytes()),
    };

    Mock::given(method("PUT"))
        .and(path("/repos/owner/repo/actions/secrets/MY_SECRET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let secret = sealed_secret("MY_SECRET", &public_key, "supersecret");
    let res = client_for(&mock_server).put_secret(&secret).await;
    assert!(res.is_ok(), "Expected put_secret to succeed on 204 response");
}

#[tokio::test]
async fn test_put_secret_api_error_propagates() {
    let mock_server = MockServer::start().await;

    let secret_key = SecretKey::generate(&mut OsRng);
    let public_key = RepositoryPublicKey {
        key_id: "test-key-id".to_string(),
        key: general_purpose::STANDARD.encode(secret_key.public_key().as_bytes()),
    };

    let err_body = r#"{"message":"Bad Request","errors":[{"resource":"Secret","code":"custom","message":"Invalid"}],"documentation_url":"https://docs.github.com"}"#;
    Mock::given(method("PUT"))
        .and(path("/repos/owner/repo/actions/secrets/MY_SECRET"))
        .respond_with(ResponseTemplate::new(400).set_body_string(err_body))
        .mount(&mock_server)
        .await;

    let secret = sealed_secret("MY_SECRET", &public_key, "supersecret");
    let err = client_for(&mock_server).put_secret(&secret).await.unwrap_err();

    assert!(matches!(
        err,
        GitHubError::ApiError {
            status_code: 400,
            ..
        }
    ));
    assert!(err.to_string().contains("Bad Request"));
}

#[tokio::test]
async fn test_new_rejects_invalid_api_url() {
    let res = GitHubClient::new(
        "token".to_string(),
        "owner".to_string(),
        "repo".to_string(),
        Some("not a url"),
    );
    assert!(matches!(res, Err(GitHubError::UriError(_))));
}
