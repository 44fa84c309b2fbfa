mod common;

mod tests {
    use super::common::MinRandom;
    use lamp_effects::{EffectId, EffectSlot};

    const ALL: [EffectId; 4] = [
        EffectId::Fire,
        EffectId::Matrix,
        EffectId::Stars,
        EffectId::Rainbow,
    ];

    #[test]
    fn test_effect_id_from_raw() {
        assert_eq!(EffectId::from_raw(0), Some(EffectId::Fire));
        assert_eq!(EffectId::from_raw(1), Some(EffectId::Matrix));
        assert_eq!(EffectId::from_raw(2), Some(EffectId::Stars));
        assert_eq!(EffectId::from_raw(3), Some(EffectId::Rainbow));
        assert_eq!(EffectId::from_raw(4), None);
    }

    #[test]
    fn test_effect_id_names_round_trip() {
        for id in ALL {
            assert_eq!(EffectId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(EffectId::Matrix.as_str(), "matrix");
        assert_eq!(EffectId::parse_from_str("aurora"), None);
    }

    #[test]
    fn test_to_slot() {
        for id in ALL {
            let slot = id.to_slot(MinRandom);
            assert_eq!(slot.id(), id);
        }
        assert!(matches!(
            EffectId::Stars.to_slot(MinRandom),
            EffectSlot::Stars(_)
        ));
    }

    #[test]
    fn test_slot_fps() {
        let rates: Vec<u8> = ALL.iter().map(|id| id.to_slot(MinRandom).fps()).collect();
        assert_eq!(rates, vec![30, 10, 60, 2]);
    }

    #[test]
    fn test_slot_reset() {
        let mut slot = EffectId::Rainbow.to_slot(MinRandom);
        slot.advance();
        slot.advance();
        slot.reset();
        let EffectSlot::Rainbow(rainbow) = &slot else {
            panic!("expected rainbow");
        };
        assert_eq!(rainbow.hue_index(), 0);
    }
}
