use super::*;
use crate::transform::aspect::AspectRatioScope;
use std::collections::{BTreeSet, HashSet};
use std::f64::consts::FRAC_PI_2;

const EPS: f64 = 1e-12;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn sample() -> FrameTransform {
    FrameTransform::IDENTITY
        .with_volume(0.8)
        .with_opacity(0.5)
        .with_brightness(1.1)
        .with_contrast(0.9)
        .with_saturation(1.3)
        .with_anchor(0.25, 0.75)
        .with_fill_translation(0.1, -0.2)
        .with_fill_scale(0.5, 0.25)
        .with_clip_translation(0.05, 0.15)
        .with_clip_scale(0.9, 0.8)
        .with_angle(0.3)
        .with_levels(Levels {
            min_input: 0.1,
            max_input: 0.9,
            min_output: 0.05,
            max_output: 0.95,
            gamma: 1.2,
        })
        .with_field_mode(FieldMode::UPPER)
        .with_key(true)
}

#[test]
fn default_is_identity() {
    let t = FrameTransform::default();
    assert_eq!(t, FrameTransform::IDENTITY);
    assert_eq!(t.volume, 1.0);
    assert_eq!(t.fill_scale, Vec2::new(1.0, 1.0));
    assert_eq!(t.clip_scale, Vec2::new(1.0, 1.0));
    assert_eq!(t.fill_translation, Vec2::ZERO);
    assert_eq!(t.levels, Levels::IDENTITY);
    assert_eq!(t.field_mode, FieldMode::PROGRESSIVE);
    assert!(!t.is_key);
    assert!(!t.is_mix);
}

#[test]
fn identity_on_either_side_is_neutral() {
    let _scope = AspectRatioScope::enter(1.0);
    let t = sample();
    let i = FrameTransform::default();
    assert_eq!(t * i, t);
    assert_eq!(i * t, t);
}

#[test]
fn concrete_scaled_translation() {
    let p = FrameTransform::IDENTITY.with_fill_scale(2.0, 2.0);
    let c = FrameTransform::IDENTITY.with_fill_translation(3.0, 4.0);
    let r = p.compose(&c, AspectRatio::SQUARE);
    assert_eq!(r.fill_translation, Vec2::new(6.0, 8.0));
    assert_eq!(r.fill_scale, Vec2::new(2.0, 2.0));
}

#[test]
fn rotation_is_corrected_for_aspect_ratio() {
    for a in [0.5, 16.0 / 9.0, 2.0] {
        let p = FrameTransform::IDENTITY.with_angle(FRAC_PI_2);
        let c = FrameTransform::IDENTITY.with_fill_translation(1.0, 0.0);
        let r = p.compose(&c, AspectRatio::new(a));
        assert!(approx(r.fill_translation.x, 0.0), "{:?}", r.fill_translation);
        assert!(approx(r.fill_translation.y, a), "{:?}", r.fill_translation);
        assert!(approx(r.angle, FRAC_PI_2));
    }
}

#[test]
fn rotated_y_is_divided_before_rotation() {
    let a = 2.0;
    let p = FrameTransform::IDENTITY.with_angle(FRAC_PI_2);
    let c = FrameTransform::IDENTITY.with_fill_translation(0.0, 1.0);
    let r = p.compose(&c, AspectRatio::new(a));
    assert!(approx(r.fill_translation.x, -1.0 / a));
    assert!(approx(r.fill_translation.y, 0.0));
}

#[test]
fn anchor_and_translation_use_parent_scale_before_update() {
    let p = FrameTransform::IDENTITY
        .with_anchor(1.0, 1.0)
        .with_fill_translation(10.0, 20.0)
        .with_fill_scale(2.0, 3.0);
    let c = FrameTransform::IDENTITY
        .with_anchor(0.5, 0.5)
        .with_fill_translation(1.0, 1.0)
        .with_fill_scale(4.0, 5.0);
    let r = p.compose(&c, AspectRatio::SQUARE);
    assert_eq!(r.anchor, Vec2::new(2.0, 2.5));
    assert_eq!(r.fill_translation, Vec2::new(12.0, 23.0));
    assert_eq!(r.fill_scale, Vec2::new(8.0, 15.0));
}

#[test]
fn clip_ignores_rotation() {
    let p = FrameTransform::IDENTITY
        .with_angle(FRAC_PI_2)
        .with_clip_translation(1.0, 1.0)
        .with_clip_scale(0.5, 2.0);
    let c = FrameTransform::IDENTITY
        .with_clip_translation(2.0, 3.0)
        .with_clip_scale(0.5, 0.5);
    let r = p.compose(&c, AspectRatio::new(1.5));
    assert_eq!(r.clip_translation, Vec2::new(2.0, 7.0));
    assert_eq!(r.clip_scale, Vec2::new(0.25, 1.0));
}

#[test]
fn scalars_multiply_and_angle_accumulates() {
    let p = sample();
    let c = FrameTransform::IDENTITY
        .with_volume(0.5)
        .with_opacity(0.5)
        .with_brightness(2.0)
        .with_contrast(2.0)
        .with_saturation(0.0)
        .with_angle(-0.5);
    let r = p.compose(&c, AspectRatio::SQUARE);
    assert_eq!(r.volume, 0.4);
    assert_eq!(r.opacity, 0.25);
    assert_eq!(r.brightness, 2.2);
    assert_eq!(r.contrast, 1.8);
    assert_eq!(r.saturation, 0.0);
    assert!(approx(r.angle, -0.2));
}

#[test]
fn flags_are_sticky_and_field_modes_intersect() {
    let bools = [false, true];
    let modes = [
        FieldMode::EMPTY,
        FieldMode::LOWER,
        FieldMode::UPPER,
        FieldMode::PROGRESSIVE,
    ];
    for pk in bools {
        for ck in bools {
            for pm in bools {
                for cm in bools {
                    for pf in modes {
                        for cf in modes {
                            let p = FrameTransform::IDENTITY
                                .with_key(pk)
                                .with_mix(pm)
                                .with_field_mode(pf);
                            let c = FrameTransform::IDENTITY
                                .with_key(ck)
                                .with_mix(cm)
                                .with_field_mode(cf);
                            let r = p.compose(&c, AspectRatio::SQUARE);
                            assert_eq!(r.is_key, pk || ck);
                            assert_eq!(r.is_mix, pm || cm);
                            assert_eq!(r.field_mode, pf & cf);
                            assert!(pf.contains(r.field_mode));
                            assert!(cf.contains(r.field_mode));
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn levels_only_narrow() {
    let p = sample();
    let c = FrameTransform::IDENTITY.with_levels(Levels {
        min_input: 0.2,
        max_input: 0.95,
        min_output: 0.0,
        max_output: 0.5,
        gamma: 0.5,
    });
    let r = p.compose(&c, AspectRatio::SQUARE);
    for operand in [p, c] {
        assert!(r.levels.min_input >= operand.levels.min_input);
        assert!(r.levels.max_input <= operand.levels.max_input);
        assert!(r.levels.min_output >= operand.levels.min_output);
        assert!(r.levels.max_output <= operand.levels.max_output);
    }
    assert_eq!(r.levels.gamma, 0.6);
}

#[test]
fn operator_uses_thread_aspect_ratio() {
    let _scope = AspectRatioScope::enter(16.0 / 9.0);
    let p = FrameTransform::IDENTITY.with_angle(0.7).with_fill_scale(1.5, 0.5);
    let c = FrameTransform::IDENTITY.with_fill_translation(0.3, 0.4);

    let explicit = p.compose(&c, AspectRatio::new(16.0 / 9.0));
    assert_eq!(p * c, explicit);
    assert_eq!(&p * &c, explicit);

    let mut in_place = p;
    in_place *= c;
    assert_eq!(in_place, explicit);
    assert_ne!(explicit, p.compose(&c, AspectRatio::SQUARE));
}

#[test]
fn compose_all_folds_root_to_leaf() {
    let _scope = AspectRatioScope::enter(1.0);
    let root = FrameTransform::IDENTITY.with_fill_scale(0.5, 0.5);
    let mid = FrameTransform::IDENTITY.with_fill_translation(0.5, 0.0).with_key(true);
    let leaf = FrameTransform::IDENTITY.with_opacity(0.5);
    let stack = [root, mid, leaf];

    let folded = FrameTransform::compose_all(&stack, AspectRatio::SQUARE);
    assert_eq!(folded, root * mid * leaf);
    assert_eq!(folded, stack.iter().product::<FrameTransform>());
    assert_eq!(folded, stack.into_iter().product::<FrameTransform>());
    assert_eq!(folded.fill_translation, Vec2::new(0.25, 0.0));
    assert!(folded.is_key);

    let empty: [FrameTransform; 0] = [];
    assert_eq!(
        FrameTransform::compose_all(&empty, AspectRatio::SQUARE),
        FrameTransform::IDENTITY
    );
}

#[test]
fn equality_is_reflexive_even_with_nan() {
    let t = sample().with_opacity(f64::NAN);
    assert_eq!(t, t);
    let payload = f64::from_bits(f64::NAN.to_bits() | 0x7);
    assert_eq!(t, t.with_opacity(payload));
}

#[test]
fn signed_zero_is_equal() {
    let a = FrameTransform::IDENTITY.with_angle(0.0);
    let b = FrameTransform::IDENTITY.with_angle(-0.0);
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), Ordering::Equal);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

#[test]
fn equality_is_symmetric_and_detects_each_field() {
    let base = sample();
    let variants = [
        base.with_volume(0.0),
        base.with_opacity(0.0),
        base.with_brightness(0.0),
        base.with_contrast(0.0),
        base.with_saturation(0.0),
        base.with_anchor(9.0, 0.75),
        base.with_anchor(0.25, 9.0),
        base.with_fill_translation(9.0, -0.2),
        base.with_fill_scale(0.5, 9.0),
        base.with_clip_translation(0.05, 9.0),
        base.with_clip_scale(9.0, 0.8),
        base.with_angle(9.0),
        base.with_levels(Levels::IDENTITY),
        base.with_field_mode(FieldMode::LOWER),
        base.with_key(false),
        base.with_mix(true),
    ];
    for v in variants {
        assert_ne!(base, v);
        assert_ne!(v, base);
        assert_eq!(base == v, v == base);
        assert_ne!(base.cmp(&v), Ordering::Equal);
        assert_eq!(base.cmp(&v), v.cmp(&base).reverse());
    }
}

#[test]
fn equal_inputs_compose_to_equal_results() {
    let a = sample();
    let b = sample().with_angle(0.3 + 0.0);
    let c = FrameTransform::IDENTITY.with_fill_translation(0.2, 0.1).with_angle(1.0);
    assert_eq!(a, b);
    assert_eq!(
        a.compose(&c, AspectRatio::new(1.2)),
        b.compose(&c, AspectRatio::new(1.2))
    );
}

#[test]
fn ordering_follows_canonical_field_order() {
    let low_volume = FrameTransform::IDENTITY.with_volume(0.5).with_opacity(9.0);
    let high_volume = FrameTransform::IDENTITY.with_volume(2.0).with_opacity(0.0);
    assert!(low_volume < high_volume);

    let unkeyed = FrameTransform::IDENTITY;
    let keyed = FrameTransform::IDENTITY.with_key(true);
    assert!(unkeyed < keyed);

    let lower = FrameTransform::IDENTITY.with_field_mode(FieldMode::LOWER);
    assert!(lower < unkeyed);
}

#[test]
fn usable_as_sorted_container_key() {
    let items = [
        sample(),
        FrameTransform::IDENTITY,
        sample().with_volume(0.1),
        FrameTransform::IDENTITY,
        sample().with_opacity(f64::NAN),
    ];
    let set: BTreeSet<FrameTransform> = items.iter().copied().collect();
    assert_eq!(set.len(), 4);
    let sorted: Vec<_> = set.into_iter().collect();
    for pair in sorted.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn json_fills_missing_fields_from_identity() {
    let t = FrameTransform::from_json(
        r#"{"opacity":0.25,"fill_translation":{"x":0.5,"y":0.0},"is_key":true}"#,
    )
    .unwrap();
    assert_eq!(
        t,
        FrameTransform::IDENTITY
            .with_opacity(0.25)
            .with_fill_translation(0.5, 0.0)
            .with_key(true)
    );
    assert!(FrameTransform::from_json("[").is_err());
}
