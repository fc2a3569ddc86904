//! Loading-screen tips.
//!
//! Every page load shows one tip at random; seeing all of them earns the
//! `loadingTipsMaster` achievement, so the count here is load-bearing.

use rand::Rng;

/// All loading tips, in display order. Index into this array is the stable
/// identity persisted in `seenTips`.
pub const TIPS: [&str; 50] = [
    "Tip: ride in the back row for the strongest airtime on most coasters.",
    "Tip: front row lines are long. Back row lines are not. Choose wisely.",
    "Tip: arrive at park opening and head straight to the furthest coaster.",
    "Tip: single rider lines can cut your wait time by half or more.",
    "Tip: loose articles in your pockets will not survive a launch coaster.",
    "Tip: wooden coasters ride differently in the rain. Rougher. Better?",
    "Tip: a coaster's best seat is rarely the one the queue funnels you to.",
    "Tip: night rides on a coaster you know well feel like a new coaster.",
    "Tip: eat after the big rides, not before. Trust me on this one.",
    "Tip: an inversion count says nothing about how good a coaster is.",
    "Tip: the lift hill is for looking at the view, not for dreading.",
    "Tip: re-rides on an empty day beat one ride on a packed day.",
    "Tip: hydrate. Queue lines in July are their own endurance sport.",
    "Tip: a 'family coaster' with good pacing beats a dull hyper coaster.",
    "Tip: check the ride's height requirement before you queue, not after.",
    "Tip: hands up on the first drop. You can hold the bar on lap two.",
    "Tip: airtime hills feel floatier with your eyes on the horizon.",
    "Tip: the rattle on an aging steel coaster is part of its personality.",
    "Tip: never judge a coaster by its first half.",
    "Tip: park maps lie about walking distances. Plan for the lie.",
    "Tip: off-season visits mean walk-on rides and closed food stalls.",
    "Tip: the photo booth screen shows you which seat gets the best shot.",
    "Tip: launch coasters reward a loose grip and a relaxed neck.",
    "Tip: a good trim brake is invisible. A bad one is unforgivable.",
    "Tip: ride the classic woodie first. It sets the day's baseline.",
    "Tip: coaster enthusiasts wave at the camera. Now you know.",
    "Tip: the queue's posted wait time is a pessimistic fiction. Usually.",
    "Tip: sit near the wheels for intensity, mid-car for smoothness.",
    "Tip: rain closes steel coasters less often than you'd fear.",
    "Tip: the airtime on a small hill at speed beats a tall hill taken slow.",
    "Tip: your phone stays in the locker. The memory stays with you.",
    "Tip: helix finales are best enjoyed with a full stomach. Kidding.",
    "Tip: count the ride ops. A well-staffed station means short waits.",
    "Tip: dueling coasters are twice the coaster if you time the race.",
    "Tip: the first drop is a promise. The layout keeps it or it doesn't.",
    "Tip: terrain coasters hide their height. Respect the ravine.",
    "Tip: a mid-course block brake is a breather, not a betrayal.",
    "Tip: indoor coasters in the dark multiply every force by surprise.",
    "Tip: the best coaster in the park is rarely the newest one.",
    "Tip: shoulder restraints: push down once, then leave them alone.",
    "Tip: a parade running means every queue in the park just got shorter.",
    "Tip: ride the kiddie coaster. For science. And the credit.",
    "Tip: a 'credit' is any coaster you've ridden. Enthusiasts count them.",
    "Tip: seatbelt plus lap bar means the ride has real airtime plans.",
    "Tip: closing hour is the golden hour. Staff will re-ride you if empty.",
    "Tip: the walk of shame past the height stick builds character.",
    "Tip: zero-g rolls feel slower the heavier the train. Physics!",
    "Tip: a coaster's soundtrack is the chain dog on the lift hill.",
    "Tip: you've read a lot of these tips now. Keep refreshing.",
    "Tip: there is no wrong way to rank coasters. Except one. See the list.",
];

/// Number of tips a completionist has to see.
pub const TIP_COUNT: usize = TIPS.len();

/// Pick a tip for this page load. Returns the index (the persisted
/// identity) together with the text.
pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> (usize, &'static str) {
    let index = rng.gen_range(0..TIP_COUNT);
    (index, TIPS[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn random_tip_index_matches_text() {
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..200 {
            let (index, text) = random_tip(&mut rng);
            assert_eq!(TIPS[index], text);
        }
    }
}
