use super::print_json;
use vla_reminders::components::outlook::HttpMethod;
use vla_reminders::components::OutlookClient;
use vla_reminders::config::Config;
use vla_reminders::error::AppResult;

/// Signed-in user
pub async fn user(config: &Config) -> AppResult<()> {
    let client = OutlookClient::new(config)?;
    print_json(&client.get_user(&config.access_token).await?)
}

/// Recent inbox messages
pub async fn messages(config: &Config) -> AppResult<()> {
    let client = OutlookClient::new(config)?;
    print_json(&client.get_messages(&config.access_token, &config.user_email).await?)
}

/// Raw API call. An unsupported verb stops here with a configuration error.
pub async fn call(
    config: &Config,
    method: &str,
    url: &str,
    payload: Option<&str>,
) -> AppResult<()> {
    let method: HttpMethod = method.parse()?;
    let client = OutlookClient::new(config)?;
    let url = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}/{}", client.base_url(), url.trim_start_matches('/'))
    };

    let response = client
        .make_api_call(&config.access_token, &config.user_email, method, &url, payload)
        .await?;
    print_json(&response)
}
