use url::Url;

/// Hands a deep link to whatever opens URLs on this platform.
///
/// Fire-and-forget: implementations report nothing back, failures included.
pub trait Launcher: Send + Sync {
    fn launch(&self, url: &Url);
}
