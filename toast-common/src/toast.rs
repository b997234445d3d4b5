use std::fmt;

/// Identifier of a toast, unique within the queue that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual category of a toast.
///
/// Labels are matched case-sensitively. Anything that is not one of the
/// three known categories is kept verbatim as `Other` and rendered with the
/// neutral treatment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Danger,
    Info,
    Other(String),
}

impl ToastKind {
    pub fn as_str(&self) -> &str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Danger => "Danger",
            ToastKind::Info => "Info",
            ToastKind::Other(label) => label,
        }
    }
}

#[allow(clippy::derivable_impls)]
impl Default for ToastKind {
    fn default() -> Self {
        ToastKind::Info
    }
}

impl From<&str> for ToastKind {
    fn from(label: &str) -> Self {
        match label {
            "Success" => ToastKind::Success,
            "Danger" => ToastKind::Danger,
            "Info" => ToastKind::Info,
            other => ToastKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ToastKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Success" | "Danger" | "Info" => ToastKind::from(label.as_str()),
            _ => ToastKind::Other(label),
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRecord {
    pub id: ToastId,
    pub kind: ToastKind,
    /// Display text, shown as-is. May be empty.
    pub message: String,
}
