//! Multi-process rank detection
//!
//! Under a distributed launcher every worker would otherwise fire the same
//! exit notification. Only the primary process (rank 0) reports; the others
//! stay quiet. The rank query is a capability so tests can pin a rank
//! instead of touching the process environment.

use std::env;

/// Rank variable exported by distributed launchers.
pub const RANK_ENV: &str = "RANK";
/// World-size variable exported alongside [`RANK_ENV`].
pub const WORLD_SIZE_ENV: &str = "WORLD_SIZE";

/// Query over ambient process-group state
pub trait ProcessGroup: Send + Sync {
    /// Rank of this process within an active group, `None` when no group is
    /// active.
    fn rank(&self) -> Option<u32>;

    /// Whether this process is the designated reporter. Single-process
    /// execution always is.
    fn is_primary(&self) -> bool {
        self.rank().map_or(true, |rank| rank == 0)
    }
}

/// Reads the group state distributed launchers export through the
/// environment. A group is considered active when both `WORLD_SIZE` and
/// `RANK` are present and parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvProcessGroup;

impl ProcessGroup for EnvProcessGroup {
    fn rank(&self) -> Option<u32> {
        let world_size: u32 = env::var(WORLD_SIZE_ENV).ok()?.parse().ok()?;
        if world_size == 0 {
            return None;
        }
        env::var(RANK_ENV).ok()?.parse().ok()
    }
}

/// Group with a pinned rank, for tests and embedders that track rank
/// themselves.
#[derive(Debug, Clone, Copy)]
pub struct FixedProcessGroup(pub Option<u32>);

impl ProcessGroup for FixedProcessGroup {
    fn rank(&self) -> Option<u32> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_group_primary_logic() {
        assert!(FixedProcessGroup(None).is_primary());
        assert!(FixedProcessGroup(Some(0)).is_primary());
        assert!(!FixedProcessGroup(Some(1)).is_primary());
        assert_eq!(FixedProcessGroup(Some(3)).rank(), Some(3));
    }

    // Exercises unset, garbage and well-formed states in one test; the
    // variables are process-global and other tests must not observe them.
    #[test]
    fn test_env_group_reads_launcher_variables() {
        env::remove_var(RANK_ENV);
        env::remove_var(WORLD_SIZE_ENV);
        assert_eq!(EnvProcessGroup.rank(), None);
        assert!(EnvProcessGroup.is_primary());

        env::set_var(WORLD_SIZE_ENV, "4");
        env::set_var(RANK_ENV, "not-a-rank");
        assert_eq!(EnvProcessGroup.rank(), None);

        env::set_var(RANK_ENV, "2");
        assert_eq!(EnvProcessGroup.rank(), Some(2));
        assert!(!EnvProcessGroup.is_primary());

        env::set_var(RANK_ENV, "0");
        assert!(EnvProcessGroup.is_primary());

        env::remove_var(RANK_ENV);
        env::remove_var(WORLD_SIZE_ENV);
    }
}
