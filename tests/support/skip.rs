/// Skip a test if live AWS test credentials are not configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("IAMGATE_TEST_ACCESS_KEY").is_err() {
            eprintln!("SKIPPED: IAMGATE_TEST_ACCESS_KEY not set");
            return;
        }
        if std::env::var("IAMGATE_TEST_SECRET_KEY").is_err() {
            eprintln!("SKIPPED: IAMGATE_TEST_SECRET_KEY not set");
            return;
        }
    };
}
