use crate::domain::scoring::{score_hand, ScoreParams, TeamHand, TeamScores};

fn params(ns: TeamHand, ew: TeamHand) -> ScoreParams {
    ScoreParams::new(ns, ew)
}

#[test]
fn made_bid_set_bid_nil_failed_and_bag_penalty() {
    // NS: bid 5, took 6 (1 bag). EW: bid 5, took 4, failed nil, sitting on 10 bags.
    let next = score_hand(
        TeamScores::new(0, 0),
        &params(
            TeamHand {
                books: 6,
                bid: 5,
                nil: false,
                bags: 1,
            },
            TeamHand {
                books: 4,
                bid: 5,
                nil: true,
                bags: 10,
            },
        ),
    );
    assert_eq!(next.ns, 51); // 5*10 + 1 bag
    assert_eq!(next.ew, -250); // set -50, failed nil -100, bags -100
}

#[test]
fn successful_nil_adds_bonus_on_top_of_zero_bid() {
    let next = score_hand(
        TeamScores::new(120, -30),
        &params(
            TeamHand {
                books: 0,
                bid: 0,
                nil: true,
                bags: 0,
            },
            TeamHand::default(),
        ),
    );
    assert_eq!(next.ns, 220);
    assert_eq!(next.ew, -30);
}

#[test]
fn nil_alongside_nonzero_bid_is_additive() {
    // Took nothing on a bid of 3 while declaring nil: set (-30) and nil made (+100)
    let next = score_hand(
        TeamScores::default(),
        &params(
            TeamHand {
                books: 0,
                bid: 3,
                nil: true,
                bags: 0,
            },
            TeamHand::default(),
        ),
    );
    assert_eq!(next.ns, 70);
}

#[test]
fn bag_penalty_applies_per_full_ten_every_call() {
    let hand = TeamHand {
        books: 4,
        bid: 4,
        nil: false,
        bags: 25,
    };
    let next = score_hand(TeamScores::new(300, 0), &params(hand, TeamHand::default()));
    // 40 for the contract, -200 for 25 cumulative bags
    assert_eq!(next.ns, 140);
}

#[test]
fn huge_bag_counts_saturate_instead_of_overflowing() {
    let hand = TeamHand {
        books: 0,
        bid: 0,
        nil: false,
        bags: u32::MAX,
    };
    let next = score_hand(TeamScores::default(), &params(hand, TeamHand::default()));
    assert_eq!(next.ns, -i32::MAX);
    assert_eq!(next.ew, 0);

    // Already deep in the hole: the running score clamps at i32::MIN
    let next = score_hand(TeamScores::new(i32::MIN, 0), &params(hand, TeamHand::default()));
    assert_eq!(next.ns, i32::MIN);
}

#[test]
fn scoring_is_pure() {
    let prev = TeamScores::new(17, 42);
    let p = params(
        TeamHand {
            books: 7,
            bid: 4,
            nil: false,
            bags: 9,
        },
        TeamHand {
            books: 6,
            bid: 8,
            nil: false,
            bags: 0,
        },
    );
    let a = score_hand(prev, &p);
    let b = score_hand(prev, &p);
    assert_eq!(a, b);
    assert_eq!(a, TeamScores::new(17 + 43, 42 - 80));
}

#[test]
fn team_scores_serialize_by_partnership() {
    let json = serde_json::to_string(&TeamScores::new(51, -250)).unwrap();
    assert_eq!(json, r#"{"NS":51,"EW":-250}"#);
}
