//! Hardware-specific information structures

/// Hardware information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardwareInfo {
    pub cpu: CpuInfo,
    pub memory: MemoryInfo,
}

/// CPU information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuInfo {
    /// `"<vendor> <threads>t @ <ghz> GHz"`, empty when cpuinfo was unreadable
    pub summary: String,
}

/// Memory information, in kB as reported by the kernel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryInfo {
    pub total_kb: u64,
    pub used_kb: u64,
    pub formatted: String,
}
