use servicequotas_rs::{ServiceQuotaResource, ServiceQuotaState, ServiceQuotasClientBuilder};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let service_code = env::var("QUOTA_SERVICE_CODE").unwrap_or_else(|_| "ec2".to_string());
    let quota_code = env::var("QUOTA_CODE").unwrap_or_else(|_| "L-1216C47A".to_string());
    let desired = match env::var("QUOTA_DESIRED_VALUE") {
        Ok(value) => value.parse::<f64>()?,
        Err(_) => {
            eprintln!("QUOTA_DESIRED_VALUE is not set. Skipping.");
            eprintln!("Example: AWS_REGION=us-east-1 QUOTA_DESIRED_VALUE=256");
            return Ok(());
        }
    };

    let client = ServiceQuotasClientBuilder::from_env()?.build()?;
    let resource = ServiceQuotaResource::new(client);

    let mut state = ServiceQuotaState::new(service_code, quota_code, desired);
    resource.create(&mut state)?;

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
