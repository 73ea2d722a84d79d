//! Execution environment classification
//!
//! The delivery strategy order depends only on a coarse device class. The
//! sniffing itself stays outside the executor as an injectable dependency
//! so tests can pin the class deterministically.

/// Coarse device class of the execution environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

/// Classifies the current execution environment
pub trait EnvironmentClassifier {
    fn classify(&self) -> DeviceClass;
}

/// User-agent substring classifier
///
/// Mobile browsers frequently block or refuse to make detached windows
/// interactive, which is all the pipeline needs to know about them.
#[derive(Debug, Clone)]
pub struct UserAgentClassifier {
    user_agent: String,
}

const MOBILE_MARKERS: &[&str] = &[
    "android", "iphone", "ipad", "ipod", "webos", "blackberry", "iemobile", "opera mini",
];

impl UserAgentClassifier {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl EnvironmentClassifier for UserAgentClassifier {
    fn classify(&self) -> DeviceClass {
        let ua = self.user_agent.to_lowercase();
        if MOBILE_MARKERS.iter().any(|marker| ua.contains(marker)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Fixed classifier for tests and hosts that know their class up front
#[derive(Debug, Clone, Copy)]
pub struct FixedClassifier(pub DeviceClass);

impl EnvironmentClassifier for FixedClassifier {
    fn classify(&self) -> DeviceClass {
        self.0
    }
}
