/// Main entry point. Takes no arguments and reads no environment.
pub fn main() -> Result<(), anyhow::Error> {
    hello_message::run::run_hello()?;
    Ok(())
}
