//! Fixed compile-matrix blocks that do not depend on the axes.

/// A static task block, emitted verbatim at the top of the compile matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticBlock {
    MakeReleaseArchive,
    DebugCompile,
    DebugCompileC11,
    DebugCompileC99,
    DebugCompileC89,
    DebugCompileValgrind,
    DebugCompileSanitizerAddress,
    DebugCompileCoverage,
    DebugCompileScanBuild,
    ReleaseCompile,
}

impl StaticBlock {
    /// Emission order.
    pub const ALL: [StaticBlock; 10] = [
        StaticBlock::MakeReleaseArchive,
        StaticBlock::DebugCompile,
        StaticBlock::DebugCompileC11,
        StaticBlock::DebugCompileC99,
        StaticBlock::DebugCompileC89,
        StaticBlock::DebugCompileValgrind,
        StaticBlock::DebugCompileSanitizerAddress,
        StaticBlock::DebugCompileCoverage,
        StaticBlock::DebugCompileScanBuild,
        StaticBlock::ReleaseCompile,
    ];

    /// Name of the task the block defines.
    pub fn task_name(&self) -> &'static str {
        match self {
            StaticBlock::MakeReleaseArchive => "make-release-archive",
            StaticBlock::DebugCompile => "debug-compile",
            StaticBlock::DebugCompileC11 => "debug-compile-c11",
            StaticBlock::DebugCompileC99 => "debug-compile-c99",
            StaticBlock::DebugCompileC89 => "debug-compile-c89",
            StaticBlock::DebugCompileValgrind => "debug-compile-valgrind",
            StaticBlock::DebugCompileSanitizerAddress => "debug-compile-sanitizer-address",
            StaticBlock::DebugCompileCoverage => "debug-compile-coverage",
            StaticBlock::DebugCompileScanBuild => "debug-compile-scan-build",
            StaticBlock::ReleaseCompile => "release-compile",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            StaticBlock::MakeReleaseArchive => {
                include_str!("../../templates/boilerplate/make_release_archive.yml")
            }
            StaticBlock::DebugCompile => {
                include_str!("../../templates/boilerplate/debug_compile.yml")
            }
            StaticBlock::DebugCompileC11 => {
                include_str!("../../templates/boilerplate/debug_compile_c11.yml")
            }
            StaticBlock::DebugCompileC99 => {
                include_str!("../../templates/boilerplate/debug_compile_c99.yml")
            }
            StaticBlock::DebugCompileC89 => {
                include_str!("../../templates/boilerplate/debug_compile_c89.yml")
            }
            StaticBlock::DebugCompileValgrind => {
                include_str!("../../templates/boilerplate/debug_compile_valgrind.yml")
            }
            StaticBlock::DebugCompileSanitizerAddress => {
                include_str!("../../templates/boilerplate/debug_compile_sanitizer_address.yml")
            }
            StaticBlock::DebugCompileCoverage => {
                include_str!("../../templates/boilerplate/debug_compile_coverage.yml")
            }
            StaticBlock::DebugCompileScanBuild => {
                include_str!("../../templates/boilerplate/debug_compile_scan_build.yml")
            }
            StaticBlock::ReleaseCompile => {
                include_str!("../../templates/boilerplate/release_compile.yml")
            }
        }
    }
}
