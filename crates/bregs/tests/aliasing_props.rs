#![cfg(not(target_arch = "wasm32"))]

use bregs::{Reg32, RegisterFrame};
use proptest::prelude::*;

proptest! {
    #[test]
    fn set_carry_only_changes_bit_zero(flags in any::<u16>(), cond in any::<bool>()) {
        let mut frame = RegisterFrame::default();
        frame.set_flags(flags);
        frame.set_carry(cond);

        prop_assert_eq!(frame.carry(), cond);
        prop_assert_eq!(frame.flags() & !1, flags & !1);
    }

    #[test]
    fn success_and_invalid_match_set_carry(flags in any::<u16>(), eax in any::<u32>()) {
        let mut base = RegisterFrame::default();
        base.set_flags(flags);
        base.set_eax(eax);

        let (mut a, mut b) = (base, base);
        a.set_success();
        b.set_carry(false);
        prop_assert_eq!(a, b);

        let (mut a, mut b) = (base, base);
        a.set_invalid_silent();
        b.set_carry(true);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn low_half_write_keeps_high_half(init in any::<u32>(), value in any::<u16>()) {
        let mut r = Reg32::new(init);
        r.set_lo16(value);
        prop_assert_eq!(r.hi16(), (init >> 16) as u16);
        prop_assert_eq!(r.lo16(), value);
    }

    #[test]
    fn byte_writes_keep_the_other_byte(init in any::<u32>(), value in any::<u8>()) {
        let mut r = Reg32::new(init);
        r.set_lo8(value);
        prop_assert_eq!(r.get(), (init & 0xFFFF_FF00) | value as u32);

        let mut r = Reg32::new(init);
        r.set_hi8(value);
        prop_assert_eq!(r.get(), (init & 0xFFFF_00FF) | (value as u32) << 8);
    }

    #[test]
    fn full_write_is_visible_through_every_view(value in any::<u32>()) {
        let mut frame = RegisterFrame::default();
        frame.set_edx(value);

        prop_assert_eq!(frame.dx(), value as u16);
        prop_assert_eq!(frame.dh(), (value >> 8) as u8);
        prop_assert_eq!(frame.dl(), value as u8);
        prop_assert_eq!(frame.edx.hi16(), (value >> 16) as u16);
    }

    #[test]
    fn frame_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 38)) {
        let frame = RegisterFrame::read_from(&bytes).unwrap();
        prop_assert_eq!(frame.as_bytes(), bytes.as_slice());
    }
}
