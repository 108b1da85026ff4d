/*!
Sample-value generation for benchmark parameters.

Each parameter of a benchmark operation is declared with a [TypeTag], and each tag names a sample domain.
Sampling is over any [Rng](rand::Rng), so a seeded source gives a restartable stream --- see [facts](crate::harness::facts).

The tags also carry their external names, as used in benchmark declarations: `int`, `fp17`, `denom`.
*/

/// A parameter type tag, naming the sample domain of a benchmark parameter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeTag {
    /// A 16-bit signed integer.
    Int,

    /// An element of the prime field of order 17.
    Field17,

    /// A small denominator, including the degenerate values −1 and 0.
    Denominator,
}

impl TypeTag {
    /// The tag of an external name, if recognised.
    pub fn from_tag(tag: &str) -> Option<TypeTag> {
        match tag {
            "int" => Some(Self::Int),

            "fp17" => Some(Self::Field17),

            "denom" => Some(Self::Denominator),

            _ => None,
        }
    }

    /// The external name of the tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Int => "int",

            Self::Field17 => "fp17",

            Self::Denominator => "denom",
        }
    }

    /// A sample from the domain of the tag.
    pub fn sample<R: rand::Rng>(&self, rng: &mut R) -> i64 {
        match self {
            Self::Int => rng.random_range(-32768..=32767),

            Self::Field17 => rng.random_range(0..=16),

            Self::Denominator => rng.random_range(-1..=5),
        }
    }
}

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::generic::MinimalPCG32;
    use rand::SeedableRng;

    #[test]
    fn names_round_trip() {
        for tag in [TypeTag::Int, TypeTag::Field17, TypeTag::Denominator] {
            assert_eq!(TypeTag::from_tag(tag.tag()), Some(tag));
        }
        assert_eq!(TypeTag::from_tag("float"), None);
    }

    #[test]
    fn samples_in_domain() {
        let mut rng = MinimalPCG32::from_seed(0u64.to_le_bytes());

        for _ in 0..512 {
            let int = TypeTag::Int.sample(&mut rng);
            assert!((-32768..=32767).contains(&int));

            let element = TypeTag::Field17.sample(&mut rng);
            assert!((0..=16).contains(&element));

            let denominator = TypeTag::Denominator.sample(&mut rng);
            assert!((-1..=5).contains(&denominator));
        }
    }
}
