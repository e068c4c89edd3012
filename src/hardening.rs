/// Maximum number of files allowed per load
pub const MAX_FILES_PER_IMPORT: usize = 500;
/// Maximum size of a single file in bytes
pub const MAX_FILE_BYTES: usize = 512 * 1024; // 512 KB per YAML
/// Maximum total size of all files in bytes
pub const MAX_TOTAL_BYTES: usize = 32 * 1024 * 1024; // 32 MB per load
/// Whether symlinked content files and directories are followed
pub const ALLOW_SYMLINKS: bool = false;
