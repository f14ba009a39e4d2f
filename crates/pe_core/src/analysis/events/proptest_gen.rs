//! Property-based test generators for the possession signals.

use super::{aggregate, detect_interceptions_with_policy, detect_passes};
use crate::engine::config::InterceptionGapPolicy;
use crate::models::{FrameAssignment, Holder, TeamControl, TeamLabel, TrackId};
use proptest::prelude::*;

/// Track ids used by generated matches.
pub const ROSTER_SIZE: usize = 8;

pub fn team_strategy() -> impl Strategy<Value = TeamLabel> {
    prop_oneof![Just(TeamLabel::TeamA), Just(TeamLabel::TeamB)]
}

pub fn policy_strategy() -> impl Strategy<Value = InterceptionGapPolicy> {
    prop_oneof![
        Just(InterceptionGapPolicy::FrameIndexVsTrackId),
        Just(InterceptionGapPolicy::HolderChanged),
    ]
}

pub fn holder_strategy() -> impl Strategy<Value = Holder> {
    prop_oneof![
        1 => Just(None),
        2 => (0..ROSTER_SIZE as u32).prop_map(|id| Some(TrackId(id))),
    ]
}

/// Possession plus per-frame assignment; each player keeps one team and is
/// occasionally missing from a frame's assignment.
pub fn match_signals_strategy() -> impl Strategy<Value = (Vec<Holder>, Vec<FrameAssignment>)> {
    (prop::collection::vec(team_strategy(), ROSTER_SIZE), 0usize..120)
        .prop_flat_map(|(teams, frames)| {
            (
                Just(teams),
                prop::collection::vec(holder_strategy(), frames),
                prop::collection::vec(
                    prop::collection::vec(prop::bool::weighted(0.85), ROSTER_SIZE),
                    frames,
                ),
            )
        })
        .prop_map(|(teams, possession, visibility)| {
            let assignment = visibility
                .iter()
                .map(|visible| {
                    visible
                        .iter()
                        .enumerate()
                        .filter(|(_, seen)| **seen)
                        .map(|(id, _)| (TrackId(id as u32), teams[id]))
                        .collect()
                })
                .collect();
            (possession, assignment)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_outputs_cover_every_frame(
            (possession, assignment) in match_signals_strategy(),
            policy in policy_strategy(),
        ) {
            let n = possession.len();
            prop_assert_eq!(detect_passes(&possession, &assignment).unwrap().len(), n);
            prop_assert_eq!(
                detect_interceptions_with_policy(&possession, &assignment, policy).unwrap().len(),
                n
            );
            prop_assert_eq!(aggregate(&possession, &assignment).unwrap().len(), n);
        }

        #[test]
        fn test_frame_zero_never_has_event(
            (possession, assignment) in match_signals_strategy(),
            policy in policy_strategy(),
        ) {
            let passes = detect_passes(&possession, &assignment).unwrap();
            let interceptions =
                detect_interceptions_with_policy(&possession, &assignment, policy).unwrap();
            if let Some(first) = passes.first() {
                prop_assert!(first.is_none());
            }
            if let Some(first) = interceptions.first() {
                prop_assert!(first.is_none());
            }
        }

        #[test]
        fn test_pass_and_interception_mutually_exclusive(
            (possession, assignment) in match_signals_strategy(),
            policy in policy_strategy(),
        ) {
            let passes = detect_passes(&possession, &assignment).unwrap();
            let interceptions =
                detect_interceptions_with_policy(&possession, &assignment, policy).unwrap();
            for (frame, (pass, interception)) in passes.iter().zip(&interceptions).enumerate() {
                prop_assert!(
                    pass.is_none() || interception.is_none(),
                    "frame {} has both a pass and an interception",
                    frame
                );
            }
        }

        #[test]
        fn test_events_credit_the_current_holders_team(
            (possession, assignment) in match_signals_strategy(),
            policy in policy_strategy(),
        ) {
            let passes = detect_passes(&possession, &assignment).unwrap();
            let interceptions =
                detect_interceptions_with_policy(&possession, &assignment, policy).unwrap();
            for frame in 0..possession.len() {
                let holder_team = assignment[frame].team_of_holder(possession[frame]);
                if let Some(team) = passes[frame] {
                    prop_assert_eq!(Some(team), holder_team);
                }
                if let Some(team) = interceptions[frame] {
                    prop_assert_eq!(Some(team), holder_team);
                    // interceptions resolve a gap that ended on the previous frame
                    prop_assert!(possession[frame - 1].is_none());
                }
            }
        }

        #[test]
        fn test_constant_holder_has_no_events(
            id in 0u32..50,
            team in team_strategy(),
            frames in 0usize..60,
            policy in policy_strategy(),
        ) {
            let track = TrackId(id);
            let possession = vec![Some(track); frames];
            let assignment = vec![FrameAssignment::new().with_player(track, team); frames];

            let passes = detect_passes(&possession, &assignment).unwrap();
            let interceptions =
                detect_interceptions_with_policy(&possession, &assignment, policy).unwrap();
            let control = aggregate(&possession, &assignment).unwrap();

            prop_assert!(passes.iter().all(Option::is_none));
            prop_assert!(interceptions.iter().all(Option::is_none));
            prop_assert!(control.iter().all(|c| *c == TeamControl::Controlled(team)));
        }

        #[test]
        fn test_no_holder_anywhere(
            (possession, assignment) in match_signals_strategy(),
            policy in policy_strategy(),
        ) {
            let possession = vec![None; possession.len()];

            let passes = detect_passes(&possession, &assignment).unwrap();
            let interceptions =
                detect_interceptions_with_policy(&possession, &assignment, policy).unwrap();
            let control = aggregate(&possession, &assignment).unwrap();

            prop_assert!(passes.iter().all(Option::is_none));
            prop_assert!(interceptions.iter().all(Option::is_none));
            prop_assert!(control.iter().all(|c| *c == TeamControl::Undetermined));
        }

        #[test]
        fn test_team_control_is_per_frame(
            (possession, assignment) in match_signals_strategy(),
            shift in 0usize..120,
        ) {
            let control = aggregate(&possession, &assignment).unwrap();

            let n = possession.len();
            let k = if n == 0 { 0 } else { shift % n };
            let mut rotated_possession = possession.clone();
            let mut rotated_assignment = assignment.clone();
            rotated_possession.rotate_left(k);
            rotated_assignment.rotate_left(k);

            let mut expected = control.clone();
            expected.rotate_left(k);
            prop_assert_eq!(aggregate(&rotated_possession, &rotated_assignment).unwrap(), expected);
        }
    }
}
