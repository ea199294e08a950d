use super::LogNotifier;
use crate::port::Notifier;

#[tokio::test]
async fn test_log_notifier_always_succeeds() {
    let notifier = LogNotifier;
    assert!(notifier.send("hello").await.is_ok());
}

#[tokio::test]
async fn test_boxed_notifier_delegates() {
    let notifier: Box<dyn Notifier> = Box::new(LogNotifier);
    assert!(notifier.send("boxed").await.is_ok());
}
