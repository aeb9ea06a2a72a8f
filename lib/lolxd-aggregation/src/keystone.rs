use lolxd_api::riot::model::Mastery;

/// Mastery ids that count as a keystone.
pub const KEYSTONE_IDS: [u32; 9] = [6161, 6162, 6164, 6361, 6362, 6363, 6261, 6262, 6263];

/// First keystone among a participant's masteries, if they picked one.
pub fn keystone(masteries: &[Mastery]) -> Option<u32> {
    masteries
        .iter()
        .map(|mastery| mastery.mastery_id)
        .find(|id| KEYSTONE_IDS.contains(id))
}
