//! Hardware information collection (CPU, Memory)

use crate::config::SourcePaths;
use crate::data::{CpuInfo, HardwareInfo, MemoryInfo};
use crate::utils::{file::*, parsing::*};
use log::debug;
use std::path::Path;

/// kB per displayed "mib". Deliberately not 1024; the output has always been
/// computed with this divisor.
pub const KB_PER_MIB: u64 = 1049;

/// Raw vendor identifiers and the short names shown instead.
const VENDOR_NAMES: &[(&str, &str)] = &[("AuthenticAMD", "AMD"), ("GenuineIntel", "Intel")];

/// Collect all hardware information
pub fn collect_hardware_info(paths: &SourcePaths) -> HardwareInfo {
    HardwareInfo {
        cpu: collect_cpu_info(&paths.cpuinfo, &paths.cpu_max_freq),
        memory: collect_memory_info(&paths.meminfo),
    }
}

/// Collect CPU information. A missing cpuinfo leaves the summary empty.
pub fn collect_cpu_info(cpuinfo: &Path, max_freq: &Path) -> CpuInfo {
    let summary = match read_optional(cpuinfo) {
        Some(text) => {
            let khz = read_optional(max_freq).and_then(|s| parse_leading_u64(&s));
            if khz.is_none() {
                debug!("no max clock speed at {}", max_freq.display());
            }
            summarize_cpu(&text, khz)
        }
        None => String::new(),
    };

    CpuInfo { summary }
}

/// Collect memory information. A missing meminfo leaves everything zeroed
/// and the formatted summary empty.
pub fn collect_memory_info(meminfo: &Path) -> MemoryInfo {
    match read_optional(meminfo) {
        Some(text) => parse_meminfo(&text),
        None => MemoryInfo::default(),
    }
}

/// Map a raw vendor identifier to its short name. Exact, case-sensitive
/// match; anything unknown passes through.
pub fn prettify_vendor(vendor: &str) -> &str {
    VENDOR_NAMES
        .iter()
        .find(|(raw, _)| *raw == vendor)
        .map(|(_, pretty)| *pretty)
        .unwrap_or(vendor)
}

/// Build `"<vendor> <threads>t[ @ <ghz> GHz]"` from cpuinfo text and an
/// optional max clock in kHz.
pub fn summarize_cpu(cpuinfo: &str, max_freq_khz: Option<u64>) -> String {
    let mut vendor_id = None;
    let mut model_name = None;
    let mut board_model = None;
    let mut hardware = None;
    let mut arm_processor = None;
    let mut siblings = None;
    let mut processors = 0u64;

    for (key, value) in cpuinfo.lines().filter_map(split_key_value) {
        let value = Some(value).filter(|v| !v.is_empty());
        match key {
            "vendor_id" if vendor_id.is_none() => vendor_id = value,
            "model name" if model_name.is_none() => model_name = value,
            "Model" if board_model.is_none() => board_model = value,
            "Hardware" if hardware.is_none() => hardware = value,
            "Processor" if arm_processor.is_none() => arm_processor = value,
            "siblings" if siblings.is_none() => siblings = value.and_then(parse_leading_u64),
            "processor" => processors += 1,
            _ => {}
        }
    }

    // ARM kernels often lack vendor_id and model name; the board or SoC
    // lines name the machine instead.
    let Some(name) = vendor_id
        .or(model_name)
        .or(board_model)
        .or(hardware)
        .or(arm_processor)
    else {
        return String::new();
    };

    let mut summary = prettify_vendor(name).to_string();
    match siblings.or((processors > 0).then_some(processors)) {
        Some(threads) => summary.push_str(&format!(" {}t", threads)),
        None => debug!("cpuinfo has no thread count"),
    }
    if let Some(khz) = max_freq_khz {
        summary.push_str(&format!(" @ {:.4} GHz", khz as f64 / 1_000_000.0));
    }
    summary
}

/// Single pass over meminfo, keeping the first `MemTotal` and `MemAvailable`.
pub fn parse_meminfo(meminfo: &str) -> MemoryInfo {
    let mut total = None;
    let mut available = None;

    for (key, value) in meminfo.lines().filter_map(split_key_value) {
        match key {
            "MemTotal" if total.is_none() => total = parse_leading_u64(value),
            "MemAvailable" if available.is_none() => available = parse_leading_u64(value),
            _ => {}
        }
    }

    let total_kb = total.unwrap_or(0);
    let used_kb = total_kb.saturating_sub(available.unwrap_or(0));

    MemoryInfo {
        total_kb,
        used_kb,
        formatted: format!("{} mib / {} mib", used_kb / KB_PER_MIB, total_kb / KB_PER_MIB),
    }
}
