//! Ear-clipping engine configuration.

/// How the candidate scan proceeds after an ear is clipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanOrder {
    /// Keep scanning the same pass at the next index of the shrunk cycle.
    /// A pass that clips nothing is a failure.
    #[default]
    Sweep,
    /// Start over at index 0 after every clip.
    Restart,
}

/// Engine options. Equality of points is always exact; there is no tolerance knob.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EarClipCfg {
    pub scan: ScanOrder,
}
