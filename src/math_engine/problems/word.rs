use rand::Rng;
use crate::math_engine::{
    helpers::round_to,
    models::{Difficulty, Problem},
    random::int_in,
};

pub fn apples_eaten(apples: i64, eaten: i64) -> Problem {
    Problem::new(
        format!(
            "Alice had {apples} apples. She ate {eaten} of them. \
             How many apples does she have now?"
        ),
        (apples - eaten) as f64,
    )
}

pub fn money_left(items: i64, price: i64, money: i64) -> Problem {
    Problem::new(
        format!(
            "Tom buys {items} toys that cost ${price} each. \
             If he had ${money}, how much money does he have left?"
        ),
        (money - items * price) as f64,
    )
}

/// Hours until two cars driving apart are `distance` miles apart, two decimals.
pub fn separation_time(speed1: i64, speed2: i64, distance: i64) -> Problem {
    Problem::new(
        format!(
            "Two cars start from the same point and travel in opposite directions. \
             The first car travels at {speed1} mph and the second at {speed2} mph. \
             How many hours will it take until they are {distance} miles apart?"
        ),
        round_to(distance as f64 / (speed1 + speed2) as f64, 2),
    )
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem {
    match difficulty {
        Difficulty::Easy => {
            let apples = int_in(rng, 5, 20);
            let eaten = int_in(rng, 1, apples - 1);
            apples_eaten(apples, eaten)
        }
        Difficulty::Medium => {
            let items = int_in(rng, 3, 8);
            let price = int_in(rng, 2, 10);
            // Always leave at least one dollar.
            let money = items * price + int_in(rng, 1, 15);
            money_left(items, price, money)
        }
        Difficulty::Hard => {
            let speed1 = int_in(rng, 30, 70);
            let speed2 = int_in(rng, 30, 70);
            let distance = int_in(rng, 100, 300);
            separation_time(speed1, speed2, distance)
        }
    }
}
