//! 越界索引：对外接口在 `index >= F` 时只返回错误，不外推也不 panic。

use title_anim::{
    AnimError, Animation, CountDirection, Counter, Effect, EffectError, FrameSource, Shine,
    TypeMode, Typewriter, parse_params, render,
};

const CASES: [(Effect, &str); 5] = [
    (Effect::CountDown, "[1;2;3]3"),
    (Effect::CountUp, "[1;2;3]3"),
    (Effect::TextWrite, "[1;2;3]Hi"),
    (Effect::TextDelete, "[1;2;3]Hi"),
    (Effect::Shine, "[1;2;3][4;5;6][7;8;9][&a;&1]Hi"),
];

fn assert_out_of_range<S: FrameSource + ?Sized>(source: &S, index: usize) {
    assert_eq!(
        source.frame(index).unwrap_err(),
        EffectError::FrameOutOfRange {
            effect: source.effect(),
            index,
            frame_count: source.frame_count(),
        },
        "{} at {index}",
        source.effect()
    );
}

#[test]
fn test_animation_rejects_index_past_last_frame() {
    for (effect, encoded) in CASES {
        let anim = Animation::prepare(effect, encoded).unwrap();
        let count = anim.frame_count();
        for index in [count, count + 1, count + 2, usize::MAX] {
            assert_out_of_range(&anim, index);
        }
    }
}

#[test]
fn test_render_rejects_index_past_last_frame() {
    for (effect, encoded) in CASES {
        let count = Animation::prepare(effect, encoded).unwrap().frame_count();
        assert!(matches!(
            render(effect, encoded, count),
            Err(AnimError::Effect(EffectError::FrameOutOfRange { .. }))
        ));
    }
}

#[test]
fn test_concrete_effects_reject_index_past_last_frame() {
    let params = parse_params("[1;2;3]3").unwrap();
    let counter = Counter::from_params(CountDirection::Down, &params).unwrap();
    assert_eq!(counter.frame_count(), 3);
    // 倒计时越界时不能做减法下溢
    assert_out_of_range(&counter, 5);

    let params = parse_params("[1;2;3]Hi").unwrap();
    let typewriter = Typewriter::from_params(TypeMode::Delete, &params).unwrap();
    assert_out_of_range(&typewriter, 3);

    let params = parse_params("[1;2;3][4;5;6][7;8;9][&a;&1]Hi").unwrap();
    let shine = Shine::from_params(&params).unwrap();
    assert_eq!(shine.frame_count(), 6);
    // 收尾帧之后不再产出扫过帧
    assert_out_of_range(&shine, 7);
}

#[test]
fn test_frames_iterator_ends_at_done_frame() {
    for (effect, encoded) in CASES {
        let anim = Animation::prepare(effect, encoded).unwrap();
        let mut frames = anim.frames();
        let collected: Vec<_> = frames.by_ref().collect();
        assert_eq!(collected.len(), anim.frame_count());
        assert!(collected.last().unwrap().done);
        assert_eq!(frames.next(), None);
    }
}
