use crate::constants::DEFAULT_INSTRUCTIONS_PER_TICK;

/// What `00EE` does when there is nothing to return to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnPolicy {
    /// Leave the program counter alone and carry on.
    Ignore,
    /// Stop with `Error::StackUnderflow`.
    Fault,
}

/// How memory accesses outside 0x000..=0xFFF are handled.
/// Covers instruction fetches as well as accesses through I.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressPolicy {
    /// Stop with `Error::AddressOutOfRange`.
    Strict,
    /// Mask the address down to 12 bits.
    Wrap,
}

impl Default for AddressPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            AddressPolicy::Strict
        } else {
            AddressPolicy::Wrap
        }
    }
}

/// # Config
/// Behaviour that historical interpreters disagree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub instructions_per_tick: usize,
    pub return_policy: ReturnPolicy,
    pub address_policy: AddressPolicy,
}

impl Config {
    pub fn instructions_per_tick(mut self, instructions_per_tick: usize) -> Self {
        self.instructions_per_tick = instructions_per_tick;
        self
    }

    pub fn return_policy(mut self, return_policy: ReturnPolicy) -> Self {
        self.return_policy = return_policy;
        self
    }

    pub fn address_policy(mut self, address_policy: AddressPolicy) -> Self {
        self.address_policy = address_policy;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            instructions_per_tick: DEFAULT_INSTRUCTIONS_PER_TICK,
            return_policy: ReturnPolicy::Ignore,
            address_policy: AddressPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.instructions_per_tick, 16);
        assert_eq!(config.return_policy, ReturnPolicy::Ignore);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .instructions_per_tick(1)
            .return_policy(ReturnPolicy::Fault)
            .address_policy(AddressPolicy::Wrap);
        assert_eq!(config.instructions_per_tick, 1);
        assert_eq!(config.return_policy, ReturnPolicy::Fault);
        assert_eq!(config.address_policy, AddressPolicy::Wrap);
    }
}
