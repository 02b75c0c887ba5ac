// ─── Hardware Descriptors ───
// Thin pass-throughs over the OS instrumentation facility. Unit conversion
// only; no core logic lives here.

use serde::Serialize;
use sysinfo::System;

const BYTES_PER_MIB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Serialize)]
pub struct ProcessorInfo {
    pub name: String,
    pub logical_cores: usize,
    pub frequency_mhz: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryInfo {
    pub total_mib: u64,
    pub available_mib: u64,
}

pub fn processor_info() -> ProcessorInfo {
    let mut system = System::new_all();
    system.refresh_all();
    let first = system.cpus().first();
    ProcessorInfo {
        name: first.map(|cpu| cpu.brand().to_string()).unwrap_or_default(),
        logical_cores: system.cpus().len(),
        frequency_mhz: first.map(|cpu| cpu.frequency()).unwrap_or_default(),
    }
}

pub fn memory_info() -> MemoryInfo {
    let mut system = System::new_all();
    system.refresh_all();
    MemoryInfo {
        total_mib: system.total_memory() / BYTES_PER_MIB,
        available_mib: system.available_memory() / BYTES_PER_MIB,
    }
}
