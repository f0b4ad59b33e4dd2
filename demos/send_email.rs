use landing::client::SendEmailClient;
use landing::configuration::get_configuration;
use landing::domain::LandingEmail;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = get_configuration()?;
    let client = SendEmailClient::new(&config.backend.base_url);

    let email = LandingEmail::parse(
        "hello.world@example.com",
        &config.validation.allowed_domains,
    )?;
    let response = client.send_email(&email).await?;

    println!("{:#?}", response);
    Ok(())
}
