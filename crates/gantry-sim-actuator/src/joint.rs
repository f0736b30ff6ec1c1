//! Simulated single-joint position actuator.
//!
//! [`SimJointActuator`] exposes one position command interface and one
//! position state interface on its first declared joint. Each read cycle the
//! reported position eases toward the commanded position by
//! `(command - state) / slowdown`, so the joint converges exponentially
//! instead of teleporting. Activation and deactivation block for a
//! configurable number of whole seconds, emitting a countdown, to imitate
//! hardware that takes time to spin up.

use std::time::Duration;

use gantry_hwi::error::HwError;
use gantry_hwi::handle::{CommandHandle, SharedValue, StateHandle};
use gantry_hwi::lifecycle::LifecycleState;
use gantry_hwi::types::{HardwareInfo, POSITION};

use crate::config::SimActuatorConfig;

/// Fully-qualified registry name for this plugin.
pub const PLUGIN_NAME: &str = "gantry_sim_actuator/SimJointActuator";

/// Log target for this component's diagnostics.
const LOG_TARGET: &str = "SimJointActuator";

type Sleeper = Box<dyn Fn(Duration) + Send + Sync>;

// ---------------------------------------------------------------------------
// SimJointActuator
// ---------------------------------------------------------------------------

/// A simulated one-joint actuator with configurable startup/shutdown delays
/// and an easing divisor applied every read cycle.
///
/// Both value cells hold `NaN` after initialization as an "unset" sentinel;
/// the first activation resolves the sentinel to `0.0`. Reactivations leave
/// the reported position untouched.
pub struct SimJointActuator {
    joint_name: String,
    config: Option<SimActuatorConfig>,
    state: SharedValue,
    command: SharedValue,
    sleeper: Sleeper,
}

impl Default for SimJointActuator {
    fn default() -> Self {
        Self::new()
    }
}

impl SimJointActuator {
    /// Create an uninitialized plugin that sleeps for real during delays.
    #[must_use]
    pub fn new() -> Self {
        Self {
            joint_name: String::new(),
            config: None,
            state: SharedValue::default(),
            command: SharedValue::default(),
            sleeper: Box::new(std::thread::sleep),
        }
    }

    /// Replace the delay sleep function. Tests inject a no-op recorder here
    /// so countdowns do not block on the wall clock.
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: impl Fn(Duration) + Send + Sync + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    fn config(&self, operation: &'static str) -> Result<SimActuatorConfig, HwError> {
        self.config.ok_or(HwError::NotActive {
            operation,
            state: LifecycleState::Unconfigured,
        })
    }

    /// Sleep one second per whole configured second, counting down. The loop
    /// bound truncates fractional delays.
    fn countdown(&self, delay_secs: f64) {
        for i in 0..delay_secs as u64 {
            (self.sleeper)(Duration::from_secs(1));
            log::info!(target: LOG_TARGET, "{:.1} seconds left...", delay_secs - i as f64);
        }
    }
}

impl gantry_hwi::actuator::Actuator for SimJointActuator {
    fn on_init(&mut self, info: &HardwareInfo) -> Result<(), HwError> {
        let config = SimActuatorConfig::from_params(&info.parameters)?;

        let joint = info.first_joint()?;
        // Exactly one position interface on each side of the joint.
        if joint.command_interfaces.len() != 1 {
            return Err(HwError::InterfaceCount {
                joint: joint.name.clone(),
                access: "command",
                found: joint.command_interfaces.len(),
            });
        }
        if joint.command_interfaces[0].name != POSITION {
            return Err(HwError::InterfaceKind {
                joint: joint.name.clone(),
                access: "command",
                found: joint.command_interfaces[0].name.clone(),
                expected: POSITION,
            });
        }
        if joint.state_interfaces.len() != 1 {
            return Err(HwError::InterfaceCount {
                joint: joint.name.clone(),
                access: "state",
                found: joint.state_interfaces.len(),
            });
        }
        if joint.state_interfaces[0].name != POSITION {
            return Err(HwError::InterfaceKind {
                joint: joint.name.clone(),
                access: "state",
                found: joint.state_interfaces[0].name.clone(),
                expected: POSITION,
            });
        }

        self.joint_name = joint.name.clone();
        self.config = Some(config);
        self.state.set(f64::NAN);
        self.command.set(f64::NAN);
        Ok(())
    }

    fn export_state_interfaces(&mut self) -> Vec<StateHandle> {
        // No handles before a successful init.
        if self.config.is_none() {
            return Vec::new();
        }
        vec![StateHandle::new(
            self.joint_name.clone(),
            POSITION,
            self.state.clone(),
        )]
    }

    fn export_command_interfaces(&mut self) -> Vec<CommandHandle> {
        if self.config.is_none() {
            return Vec::new();
        }
        vec![CommandHandle::new(
            self.joint_name.clone(),
            POSITION,
            self.command.clone(),
        )]
    }

    fn on_activate(&mut self, _previous: LifecycleState) -> Result<(), HwError> {
        let config = self.config("activate")?;
        log::info!(target: LOG_TARGET, "starting, please wait...");
        self.countdown(config.start_delay_secs);

        // First activation: resolve the unset sentinel so the control loop
        // starts from a defined position.
        if self.state.get().is_nan() {
            self.state.set(0.0);
            self.command.set(0.0);
        }

        log::info!(target: LOG_TARGET, "successfully started");
        Ok(())
    }

    fn on_deactivate(&mut self, _previous: LifecycleState) -> Result<(), HwError> {
        let config = self.config("deactivate")?;
        log::info!(target: LOG_TARGET, "stopping, please wait...");
        self.countdown(config.stop_delay_secs);
        log::info!(target: LOG_TARGET, "successfully stopped");
        Ok(())
    }

    fn read(&mut self) -> Result<(), HwError> {
        let config = self.config("read")?;
        let command = self.command.get();
        let position = self
            .state
            .update(|state| state + (command - state) / config.slowdown);
        log::debug!(
            target: LOG_TARGET,
            "got state {position:.5} for joint '{}'",
            self.joint_name
        );
        Ok(())
    }

    fn write(&mut self) -> Result<(), HwError> {
        self.config("write")?;
        // Nothing to push anywhere; the command cell is the hardware.
        log::debug!(
            target: LOG_TARGET,
            "got command {:.5} for joint '{}'",
            self.command.get(),
            self.joint_name
        );
        Ok(())
    }

    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "SimJointActuator"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use gantry_hwi::actuator::Actuator;
    use gantry_hwi::types::{InterfaceConfig, JointDescriptor};

    use super::*;
    use crate::config::{PARAM_SLOWDOWN, PARAM_START_DURATION, PARAM_STOP_DURATION};

    fn info_with(start: &str, stop: &str, slowdown: &str) -> HardwareInfo {
        HardwareInfo::new("gantry_lift_joint")
            .with_joint(JointDescriptor::position_joint("joint1"))
            .with_parameter(PARAM_START_DURATION, start)
            .with_parameter(PARAM_STOP_DURATION, stop)
            .with_parameter(PARAM_SLOWDOWN, slowdown)
    }

    fn info() -> HardwareInfo {
        info_with("0", "0", "2.0")
    }

    /// An initialized plugin with zero delays and a no-op sleeper.
    fn ready(slowdown: &str) -> SimJointActuator {
        let mut plugin = SimJointActuator::new().with_sleeper(|_| {});
        plugin.on_init(&info_with("0", "0", slowdown)).unwrap();
        plugin
    }

    // -- Initialization and validation --

    #[test]
    fn init_accepts_single_position_joint() {
        let mut plugin = SimJointActuator::new();
        plugin.on_init(&info()).unwrap();
        assert_eq!(plugin.joint_name, "joint1");
    }

    #[test]
    fn init_rejects_description_without_joints() {
        let mut plugin = SimJointActuator::new();
        let description = HardwareInfo::new("empty")
            .with_parameter(PARAM_START_DURATION, "0")
            .with_parameter(PARAM_STOP_DURATION, "0")
            .with_parameter(PARAM_SLOWDOWN, "2.0");
        let err = plugin.on_init(&description).unwrap_err();
        assert!(matches!(err, HwError::MissingJoint(_)));
    }

    #[test]
    fn init_rejects_extra_command_interface() {
        let mut joint = JointDescriptor::position_joint("joint1");
        joint.command_interfaces.push(InterfaceConfig::new("velocity"));
        let description = HardwareInfo {
            joints: vec![joint],
            ..info()
        };

        let mut plugin = SimJointActuator::new();
        let err = plugin.on_init(&description).unwrap_err();
        assert!(matches!(
            err,
            HwError::InterfaceCount {
                access: "command",
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn init_rejects_wrong_command_interface_kind() {
        let joint = JointDescriptor {
            name: "joint1".into(),
            command_interfaces: vec![InterfaceConfig::new("velocity")],
            state_interfaces: vec![InterfaceConfig::new(POSITION)],
        };
        let description = HardwareInfo {
            joints: vec![joint],
            ..info()
        };

        let mut plugin = SimJointActuator::new();
        let err = plugin.on_init(&description).unwrap_err();
        match err {
            HwError::InterfaceKind {
                access, found, expected, ..
            } => {
                assert_eq!(access, "command");
                assert_eq!(found, "velocity");
                assert_eq!(expected, "position");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn init_rejects_missing_state_interface() {
        let joint = JointDescriptor {
            name: "joint1".into(),
            command_interfaces: vec![InterfaceConfig::new(POSITION)],
            state_interfaces: vec![],
        };
        let description = HardwareInfo {
            joints: vec![joint],
            ..info()
        };

        let mut plugin = SimJointActuator::new();
        let err = plugin.on_init(&description).unwrap_err();
        assert!(matches!(
            err,
            HwError::InterfaceCount {
                access: "state",
                found: 0,
                ..
            }
        ));
    }

    #[test]
    fn init_rejects_wrong_state_interface_kind() {
        let joint = JointDescriptor {
            name: "joint1".into(),
            command_interfaces: vec![InterfaceConfig::new(POSITION)],
            state_interfaces: vec![InterfaceConfig::new("effort")],
        };
        let description = HardwareInfo {
            joints: vec![joint],
            ..info()
        };

        let mut plugin = SimJointActuator::new();
        let err = plugin.on_init(&description).unwrap_err();
        assert!(matches!(err, HwError::InterfaceKind { access: "state", .. }));
    }

    #[test]
    fn init_rejects_invalid_slowdown() {
        let mut plugin = SimJointActuator::new();
        let err = plugin
            .on_init(&info_with("0", "0", "0"))
            .unwrap_err();
        assert!(matches!(err, HwError::InvalidParameter { .. }));
    }

    // -- Exported interfaces --

    #[test]
    fn exports_one_handle_per_side() {
        let mut plugin = ready("2.0");
        let states = plugin.export_state_interfaces();
        let commands = plugin.export_command_interfaces();
        assert_eq!(states.len(), 1);
        assert_eq!(commands.len(), 1);
        assert!(states[0].matches("joint1", "position"));
        assert!(commands[0].matches("joint1", "position"));
    }

    #[test]
    fn no_handles_before_init() {
        let mut plugin = SimJointActuator::new();
        assert!(plugin.export_state_interfaces().is_empty());
        assert!(plugin.export_command_interfaces().is_empty());
    }

    #[test]
    fn no_handles_after_failed_init() {
        let mut plugin = SimJointActuator::new();
        let description = HardwareInfo::new("empty")
            .with_parameter(PARAM_START_DURATION, "0")
            .with_parameter(PARAM_STOP_DURATION, "0")
            .with_parameter(PARAM_SLOWDOWN, "2.0");
        assert!(plugin.on_init(&description).is_err());
        assert!(plugin.export_state_interfaces().is_empty());
        assert!(plugin.export_command_interfaces().is_empty());
    }

    #[test]
    fn cells_hold_nan_sentinel_after_init() {
        let mut plugin = ready("2.0");
        assert!(plugin.export_state_interfaces()[0].get().is_nan());
        assert!(plugin.export_command_interfaces()[0].get().is_nan());
    }

    // -- Activation --

    #[test]
    fn first_activate_resolves_sentinel_to_zero() {
        let mut plugin = ready("2.0");
        let state = plugin.export_state_interfaces().remove(0);
        let command = plugin.export_command_interfaces().remove(0);

        plugin.on_activate(LifecycleState::Inactive).unwrap();
        assert!(state.get().abs() < f64::EPSILON);
        assert!(command.get().abs() < f64::EPSILON);
    }

    #[test]
    fn reactivation_preserves_position() {
        let mut plugin = ready("2.0");
        let state = plugin.export_state_interfaces().remove(0);
        let command = plugin.export_command_interfaces().remove(0);

        plugin.on_activate(LifecycleState::Inactive).unwrap();
        command.set(10.0);
        plugin.read().unwrap();
        let position = state.get();

        plugin.on_deactivate(LifecycleState::Active).unwrap();
        plugin.on_activate(LifecycleState::Inactive).unwrap();
        assert!((state.get() - position).abs() < f64::EPSILON);
        assert!((command.get() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn activate_sleeps_once_per_whole_second() {
        let sleeps = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&sleeps);
        let mut plugin = SimJointActuator::new()
            .with_sleeper(move |d| {
                assert_eq!(d, Duration::from_secs(1));
                counter.fetch_add(1, Ordering::Relaxed);
            });
        plugin.on_init(&info_with("3.0", "0", "2.0")).unwrap();

        plugin.on_activate(LifecycleState::Inactive).unwrap();
        assert_eq!(sleeps.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn zero_delay_never_sleeps() {
        let sleeps = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&sleeps);
        let mut plugin =
            SimJointActuator::new().with_sleeper(move |_| {
                counter.fetch_add(1, Ordering::Relaxed);
            });
        plugin.on_init(&info()).unwrap();

        plugin.on_activate(LifecycleState::Inactive).unwrap();
        plugin.on_deactivate(LifecycleState::Active).unwrap();
        assert_eq!(sleeps.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn fractional_delay_truncates() {
        let sleeps = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&sleeps);
        let mut plugin =
            SimJointActuator::new().with_sleeper(move |_| {
                counter.fetch_add(1, Ordering::Relaxed);
            });
        plugin.on_init(&info_with("2.9", "0", "2.0")).unwrap();

        plugin.on_activate(LifecycleState::Inactive).unwrap();
        assert_eq!(sleeps.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn deactivate_uses_stop_delay() {
        let sleeps = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&sleeps);
        let mut plugin =
            SimJointActuator::new().with_sleeper(move |_| {
                counter.fetch_add(1, Ordering::Relaxed);
            });
        plugin.on_init(&info_with("0", "2.0", "2.0")).unwrap();

        plugin.on_activate(LifecycleState::Inactive).unwrap();
        plugin.on_deactivate(LifecycleState::Active).unwrap();
        assert_eq!(sleeps.load(Ordering::Relaxed), 2);
    }

    // -- Read/write cycles --

    #[test]
    fn read_eases_toward_command() {
        let mut plugin = ready("2.0");
        let state = plugin.export_state_interfaces().remove(0);
        let command = plugin.export_command_interfaces().remove(0);
        plugin.on_activate(LifecycleState::Inactive).unwrap();

        command.set(10.0);
        let expected = [5.0, 7.5, 8.75, 9.375];
        for want in expected {
            plugin.read().unwrap();
            plugin.write().unwrap();
            assert!((state.get() - want).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn read_converges_monotonically() {
        let mut plugin = ready("4.0");
        let state = plugin.export_state_interfaces().remove(0);
        let command = plugin.export_command_interfaces().remove(0);
        plugin.on_activate(LifecycleState::Inactive).unwrap();

        command.set(-3.0);
        let mut previous_gap = f64::INFINITY;
        for n in 1..=50u32 {
            plugin.read().unwrap();
            let gap = (state.get() - (-3.0)).abs();
            assert!(gap <= previous_gap);
            previous_gap = gap;

            // Closed form of the easing recurrence.
            let expected = -3.0 * (1.0 - (1.0_f64 - 1.0 / 4.0).powi(n as i32));
            assert!((state.get() - expected).abs() < 1e-12);
        }
        assert!(previous_gap < 1e-3);
    }

    #[test]
    fn slowdown_one_reaches_command_in_one_cycle() {
        let mut plugin = ready("1.0");
        let state = plugin.export_state_interfaces().remove(0);
        let command = plugin.export_command_interfaces().remove(0);
        plugin.on_activate(LifecycleState::Inactive).unwrap();

        command.set(4.25);
        plugin.read().unwrap();
        assert!((state.get() - 4.25).abs() < f64::EPSILON);
    }

    #[test]
    fn write_leaves_values_untouched() {
        let mut plugin = ready("2.0");
        let state = plugin.export_state_interfaces().remove(0);
        let command = plugin.export_command_interfaces().remove(0);
        plugin.on_activate(LifecycleState::Inactive).unwrap();

        command.set(1.0);
        plugin.read().unwrap();
        let position = state.get();
        plugin.write().unwrap();
        plugin.write().unwrap();
        assert!((state.get() - position).abs() < f64::EPSILON);
        assert!((command.get() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cycle_before_init_rejected() {
        let mut plugin = SimJointActuator::new();
        assert!(plugin.read().is_err());
        assert!(plugin.write().is_err());
        assert!(plugin.on_activate(LifecycleState::Inactive).is_err());
    }

    #[test]
    fn plugin_reports_its_name() {
        let plugin = SimJointActuator::new();
        assert_eq!(plugin.name(), "SimJointActuator");
        assert_eq!(PLUGIN_NAME, "gantry_sim_actuator/SimJointActuator");
    }
}
