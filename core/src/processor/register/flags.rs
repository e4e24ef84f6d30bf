use std::cmp::Ordering;

/// Comparison flags, laid out as `00000LGE` when packed.
///
/// A comparison always leaves exactly one of `l`, `g`, `e` set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    l: bool,
    g: bool,
    e: bool,
}

impl Flags {
    pub const LESS: u8 = 0b0000_0100;
    pub const GREATER: u8 = 0b0000_0010;
    pub const EQUAL: u8 = 0b0000_0001;

    pub fn new() -> Flags {
        Flags {
            l: false,
            g: false,
            e: false,
        }
    }

    pub fn set_comparison(&mut self, ordering: Ordering) {
        self.l = ordering == Ordering::Less;
        self.g = ordering == Ordering::Greater;
        self.e = ordering == Ordering::Equal;
    }

    pub fn less(&self) -> bool { self.l }
    pub fn greater(&self) -> bool { self.g }
    pub fn equal(&self) -> bool { self.e }

    pub fn get(&self) -> u8 {
        macro_rules! convert {
            ($flag: ident) => {
                self.$flag as u8
            };
        }

        let l = convert!(l) << 2;
        let g = convert!(g) << 1;
        let e = convert!(e) << 0;

        l | g | e
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_at_boot() {
        let flags = Flags::new();
        assert_eq!(flags.get(), 0);
    }

    #[test]
    fn exactly_one_bit_after_comparison() {
        let mut flags = Flags::new();

        flags.set_comparison(Ordering::Less);
        assert_eq!(flags.get(), Flags::LESS);

        flags.set_comparison(Ordering::Greater);
        assert_eq!(flags.get(), Flags::GREATER);
        assert!(!flags.less());

        flags.set_comparison(Ordering::Equal);
        assert_eq!(flags.get(), Flags::EQUAL);
        assert!(flags.equal());
        assert!(!flags.greater());
    }
}
