use onesignal::{Credentials, OneSignalClient, ViewDevices};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let limit = std::env::var("ONESIGNAL_LIMIT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(10);

    let client = OneSignalClient::new(Credentials::from_env()?);
    let devices = client.view_devices(ViewDevices::new(limit, 0)?).await?;

    println!("total: {}", devices.total_count);
    for device in devices.players {
        println!(
            "{} type={:?} last_active={:?}",
            device.id, device.device_type, device.last_active
        );
    }

    Ok(())
}
