//! Handle `ergo assess`: validate raw measurements, run the engine, and
//! optionally persist the result.

use anyhow::bail;

use ergo_config::ErgoConfig;
use ergo_core::entities::AssessmentInput;
use ergo_core::enums::{GripQuality, LiftDuration};

use crate::bootstrap;
use crate::cli::{AssessArgs, GlobalFlags};
use crate::output;

/// Range validation lives here, at the UI boundary. The engine is total
/// over its domain and would degrade out-of-range values to a 0 multiplier
/// instead of rejecting them; the form rejects them first.
fn validate(args: &AssessArgs) -> anyhow::Result<()> {
    if args.weight <= 0.0 {
        bail!("--weight must be positive (kg)");
    }
    if args.horizontal < 0.0 {
        bail!("--horizontal must be non-negative (cm)");
    }
    if !(0.0..=175.0).contains(&args.vertical) {
        bail!("--vertical must be within 0-175 (cm)");
    }
    if args.distance <= 0.0 {
        bail!("--distance must be positive (cm)");
    }
    if !(0.0..=135.0).contains(&args.angle) {
        bail!("--angle must be within 0-135 (degrees)");
    }
    if args.frequency <= 0.0 {
        bail!("--frequency must be positive (lifts/min)");
    }
    Ok(())
}

pub async fn handle(
    args: &AssessArgs,
    config: &ErgoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    validate(args)?;

    let input = AssessmentInput {
        weight: args.weight,
        horizontal_distance: args.horizontal,
        vertical_height: args.vertical,
        distance_moved: args.distance,
        asymmetric_angle: args.angle,
        frequency: args.frequency,
        duration: LiftDuration::from_input(&args.duration),
        grip_quality: GripQuality::from_input(&args.grip),
    };
    let result = ergo_engine::compute(&input);

    if let Some(username) = &args.user {
        let service = bootstrap::open_service(config).await?;
        let user = bootstrap::require_user(&service, username).await?;
        let stored = service
            .insert_evaluation(user.uid, args.name.as_deref(), &result)
            .await?;
        return output::output(&stored, flags.format);
    }

    output::output(&result, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AssessArgs {
        AssessArgs {
            weight: 10.0,
            horizontal: 25.0,
            vertical: 75.0,
            distance: 25.0,
            angle: 0.0,
            frequency: 1.0,
            duration: "moderate".into(),
            grip: "good".into(),
            name: None,
            user: None,
        }
    }

    #[test]
    fn in_range_measurements_pass() {
        assert!(validate(&args()).is_ok());
    }

    #[test]
    fn out_of_range_measurements_are_rejected() {
        let cases: Vec<(fn(&mut AssessArgs), &str)> = vec![
            (|a| a.weight = 0.0, "weight"),
            (|a| a.horizontal = -1.0, "horizontal"),
            (|a| a.vertical = 176.0, "vertical"),
            (|a| a.distance = 0.0, "distance"),
            (|a| a.angle = 140.0, "angle"),
            (|a| a.frequency = 0.0, "frequency"),
        ];
        for (mutate, field) in cases {
            let mut bad = args();
            mutate(&mut bad);
            let err = validate(&bad).unwrap_err().to_string();
            assert!(err.contains(field), "expected {field} error, got: {err}");
        }
    }
}
