pub fn setup()
{
    let _ = env_logger::try_init();
}
