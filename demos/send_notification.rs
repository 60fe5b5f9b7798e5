use std::io;

use onesignal::{
    Content, CreateNotification, Credentials, Field, Filter, Filters, OneSignalClient, Relation,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::from_env()?;
    let tag = std::env::var("ONESIGNAL_TAG").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ONESIGNAL_TAG environment variable is required",
        )
    })?;
    let message = std::env::var("ONESIGNAL_MESSAGE")
        .unwrap_or_else(|_| "Hello from the onesignal demo.".to_owned());

    let mut filters = Filters::new();
    filters
        .add_filter(Filter::new(Field::Tag).key(tag).relation(Relation::Exists))
        .add_and()
        .add_filter(Filter::new(Field::LastSession).relation(Relation::LessThan).hours_ago("72"));

    let client = OneSignalClient::new(credentials);
    let request = CreateNotification::new()
        .add_message([Content::english(message, "Demo")])
        .with_filters(filters);

    let response = client.create_notification(request).await?;
    println!(
        "id: {}, recipients: {}, errors: {:?}",
        response.id, response.recipients, response.errors
    );

    Ok(())
}
