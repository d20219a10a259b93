// Flavor-text quotes printed under the end-of-run summary

use rand::Rng;
use rand::RngExt;

/// Shown when at least one test failed
pub const FAILURE_QUOTES: &[&str] = &[
    "“Houston, we have a problem.” - Apollo 13",
    "“Failure is not an option.” - Apollo 13",
    "“Why so serious?” - The Dark Knight",
    "“I find your lack of passing disturbing.” - Darth Vader",
    "“It's not a bug, it's a feature!” - Every developer ever",
    "Oh, crap, it failed! But it worked on my machine!",
    "Tests won't fail if you have no tests!",
    "PLEASE LET ME MERGE BEFORE I START CRYING",
    "“You can’t handle the truth!” - A Few Good Men",
];

/// Shown when every test passed
pub const SUCCESS_QUOTES: &[&str] = &[
    "“Hasta la vista, baby.” - The Terminator",
    "“All systems go!” - NASA",
    "“That’s one small step for man, one giant leap for… tests!” - Apollo 11",
    "“Victory is ours!” - Braveheart",
    "“I'm king of the world!” - Titanic",
    "“You’re a wizard, Harry!” - Harry Potter",
    "“Live long and prosper.” - Star Trek",
];

/// Pick one quote uniformly at random
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, quotes: &'a [&'a str]) -> &'a str {
    quotes[rng.random_range(0..quotes.len())]
}
