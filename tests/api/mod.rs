use anyhow::Result;
use tableau_dictionary::api::TableauClient;
use tableau_dictionary::auth::Credentials;
use tableau_dictionary::config::ServerConfig;

#[tokio::test]
#[ignore] // Requires TABLEAU_SERVER, TABLEAU_USERNAME and TABLEAU_PASSWORD
async fn test_list_datasources_with_real_credentials() -> Result<()> {
    let credentials = Credentials::from_env()?;
    let config = ServerConfig::default();
    let client = TableauClient::from_config(&credentials.server, &config)?;

    let session = client.sign_in(&credentials, &config.site).await?;
    let datasources = client.list_datasources(&session).await;
    client.sign_out(&session).await?;

    for datasource in datasources? {
        assert!(!datasource.id.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test_sign_in_failure_message() {
    let credentials = Credentials::from_command_line(
        "http://127.0.0.1:9".to_string(),
        "nobody".to_string(),
        "wrong".to_string(),
    );
    let client = TableauClient::new(
        &credentials.server,
        "3.0",
        std::time::Duration::from_secs(2),
    )
    .unwrap();

    let err = client.sign_in(&credentials, "").await.unwrap_err();
    assert_eq!(err.to_string(), tableau_dictionary::api::SIGN_IN_FAILED);
}
