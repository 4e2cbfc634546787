// crates/fa_model/tests/model_tests.rs

//! 气动力模型性质测试
//!
//! 验证模型的核心性质：速度域形状、两条序列的独立性、
//! 解析解对照与端到端数值。这些测试应该快速完成（<1秒）。

use fa_model::{compute_series, CarProfile, SimulationParameters};

// ============================================================
// 速度域形状
// ============================================================

#[test]
fn test_series_has_51_samples() {
    let series = compute_series(&SimulationParameters::default()).unwrap();
    assert_eq!(series.len(), 51);
}

#[test]
fn test_speed_domain_is_100_to_300_step_4() {
    let series = compute_series(&SimulationParameters::default()).unwrap();
    for (i, sample) in series.samples.iter().enumerate() {
        let expected = 100.0 + 4.0 * i as f64;
        assert!(
            (sample.speed_kmh - expected).abs() < 1e-12,
            "sample {}: expected {} km/h, got {}",
            i,
            expected,
            sample.speed_kmh
        );
    }
}

#[test]
fn test_domain_independent_of_current_speed() {
    // 当前车速只影响展示高亮，不影响序列生成
    let slow = compute_series(&SimulationParameters::new(100.0, 15.0, "Ferrari SF-23")).unwrap();
    let fast = compute_series(&SimulationParameters::new(340.0, 15.0, "Ferrari SF-23")).unwrap();
    assert_eq!(slow.samples, fast.samples);
}

// ============================================================
// 序列独立性
// ============================================================

#[test]
fn test_drag_independent_of_angle() {
    let a = compute_series(&SimulationParameters::new(250.0, 5.0, "Mercedes W14")).unwrap();
    let b = compute_series(&SimulationParameters::new(250.0, 40.0, "Mercedes W14")).unwrap();

    for (sa, sb) in a.samples.iter().zip(&b.samples) {
        assert!((sa.drag_n - sb.drag_n).abs() < 1e-9);
    }
    // 下压力必须随角度变化
    assert!(b.samples[0].downforce_n > a.samples[0].downforce_n);
}

#[test]
fn test_downforce_independent_of_car() {
    let a = compute_series(&SimulationParameters::new(250.0, 20.0, "Ferrari SF-23")).unwrap();
    let b = compute_series(&SimulationParameters::new(250.0, 20.0, "Red Bull RB19")).unwrap();

    for (sa, sb) in a.samples.iter().zip(&b.samples) {
        assert!((sa.downforce_n - sb.downforce_n).abs() < 1e-9);
    }
    // 阻力必须随 Cd 变化 (SF-23: 0.80 > RB19: 0.75)
    assert!(a.samples[0].drag_n > b.samples[0].drag_n);
}

// ============================================================
// 解析解对照
// ============================================================

#[test]
fn test_zero_angle_closed_form() {
    // angle=0 时 angleFactor=1，下压力 = 0.5·1.225·1.5·v²
    let series = compute_series(&SimulationParameters::new(250.0, 0.0, "Ferrari SF-23")).unwrap();

    for sample in &series.samples {
        let v = sample.speed_kmh / 3.6;
        let expected = 0.5 * 1.225 * 1.5 * v * v;
        assert!((sample.downforce_n - expected).abs() < 1e-9);
    }
}

#[test]
fn test_drag_scales_with_cd() {
    let w14 = compute_series(&SimulationParameters::new(250.0, 15.0, "Mercedes W14")).unwrap();
    let rb19 = compute_series(&SimulationParameters::new(250.0, 15.0, "Red Bull RB19")).unwrap();

    for (a, b) in w14.samples.iter().zip(&rb19.samples) {
        let ratio = a.drag_n / b.drag_n;
        assert!((ratio - 0.82 / 0.75).abs() < 1e-9);
    }
}

// ============================================================
// 端到端数值
// ============================================================

#[test]
fn test_end_to_end_rb19_at_300() {
    // 300 km/h, 角度 30°, RB19 (Cd=0.75):
    // v = 83.333 m/s, downforce ≈ 10633.7 N, drag ≈ 4785.2 N
    let params = SimulationParameters::new(300.0, 30.0, "Red Bull RB19");
    let series = compute_series(&params).unwrap();

    assert_eq!(series.car, CarProfile::RedBullRb19);

    let last = series.samples.last().unwrap();
    assert!((last.speed_kmh - 300.0).abs() < 1e-12);
    assert!((last.downforce_n - 10633.68).abs() < 0.01);
    assert!((last.drag_n - 4785.16).abs() < 0.01);
}

#[test]
fn test_deterministic() {
    let params = SimulationParameters::new(300.0, 30.0, "Red Bull RB19");
    let a = compute_series(&params).unwrap();
    let b = compute_series(&params).unwrap();
    assert_eq!(a, b);
}

// ============================================================
// 序列统计
// ============================================================

#[test]
fn test_peaks_are_at_max_speed() {
    let series = compute_series(&SimulationParameters::default()).unwrap();
    let last = series.samples.last().unwrap();
    assert!((series.peak_downforce() - last.downforce_n).abs() < 1e-9);
    assert!((series.peak_drag() - last.drag_n).abs() < 1e-9);
}
