// crates/fa_io/src/exporters/csv.rs

//! CSV 导出器
//!
//! 将气动力序列导出为 CSV 文本：
//!
//! ```text
//! Speed (km/h),Downforce (N),Drag (N)
//! 100,945.22,567.13
//! 104,1022.35,613.41
//! ...
//! ```
//!
//! 力值定点保留 2 位小数（非科学计数法），逗号分隔，换行分行，
//! 末尾不要求空行。文件名约定 `f1_aero_sim_<型号，空格换下划线>.csv`。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fa_model::{CarProfile, ForceSeries};

use crate::error::{IoError, IoResult};

/// CSV 表头
pub const CSV_HEADER: &str = "Speed (km/h),Downforce (N),Drag (N)";

/// 导出文件名约定
pub fn csv_file_name(car: CarProfile) -> String {
    format!("f1_aero_sim_{}.csv", car.file_stem())
}

/// CSV 导出器
#[derive(Debug, Clone)]
pub struct CsvExporter {
    /// 力值小数位数
    decimals: usize,
    /// 是否写表头行
    header: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvExporter {
    /// 创建默认导出器（2 位小数，含表头）
    pub fn new() -> Self {
        Self {
            decimals: 2,
            header: true,
        }
    }

    /// 设置小数位数
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// 设置是否写表头
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// 导出为 CSV 字符串
    pub fn to_csv_string(&self, series: &ForceSeries) -> String {
        let mut out = String::new();
        if self.header {
            out.push_str(CSV_HEADER);
            out.push('\n');
        }
        for (i, sample) in series.samples.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!(
                "{},{:.prec$},{:.prec$}",
                sample.speed_kmh,
                sample.downforce_n,
                sample.drag_n,
                prec = self.decimals
            ));
        }
        out
    }

    /// 导出为字节（UTF-8 编码的 CSV 文本）
    pub fn to_bytes(&self, series: &ForceSeries) -> Vec<u8> {
        self.to_csv_string(series).into_bytes()
    }

    /// 写入文件
    pub fn write(&self, path: impl AsRef<Path>, series: &ForceSeries) -> IoResult<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| IoError::io(format!("无法创建 {}", path.display()), e))?;
        let mut w = BufWriter::new(file);
        w.write_all(self.to_csv_string(series).as_bytes())
            .map_err(|e| IoError::io(format!("写入 {} 失败", path.display()), e))?;
        w.flush()
            .map_err(|e| IoError::io(format!("写入 {} 失败", path.display()), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fa_model::{compute_series, SimulationParameters};

    fn demo_series() -> ForceSeries {
        compute_series(&SimulationParameters::default()).unwrap()
    }

    #[test]
    fn test_header_row() {
        let csv = CsvExporter::new().to_csv_string(&demo_series());
        assert!(csv.starts_with("Speed (km/h),Downforce (N),Drag (N)\n"));
    }

    #[test]
    fn test_row_count() {
        let csv = CsvExporter::new().to_csv_string(&demo_series());
        assert_eq!(csv.lines().count(), 52); // 表头 + 51 行数据
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_speeds_printed_as_integers() {
        let csv = CsvExporter::new().to_csv_string(&demo_series());
        let first_row = csv.lines().nth(1).unwrap();
        assert!(first_row.starts_with("100,"));
        let last_row = csv.lines().last().unwrap();
        assert!(last_row.starts_with("300,"));
    }

    #[test]
    fn test_forces_fixed_two_decimals() {
        let csv = CsvExporter::new().to_csv_string(&demo_series());
        for row in csv.lines().skip(1) {
            let fields: Vec<&str> = row.split(',').collect();
            assert_eq!(fields.len(), 3);
            for value in &fields[1..] {
                let (_, frac) = value.split_once('.').expect("定点小数格式");
                assert_eq!(frac.len(), 2, "row: {row}");
                assert!(!value.contains('e') && !value.contains('E'));
            }
        }
    }

    #[test]
    fn test_roundtrip_within_tolerance() {
        // 导出再解析，51 个速度点与力值误差应在 0.01 以内
        let series = demo_series();
        let csv = CsvExporter::new().to_csv_string(&series);

        let mut parsed = 0;
        for (row, sample) in csv.lines().skip(1).zip(&series.samples) {
            let fields: Vec<f64> = row.split(',').map(|s| s.parse().unwrap()).collect();
            assert!((fields[0] - sample.speed_kmh).abs() < 1e-12);
            assert!((fields[1] - sample.downforce_n).abs() <= 0.01);
            assert!((fields[2] - sample.drag_n).abs() <= 0.01);
            parsed += 1;
        }
        assert_eq!(parsed, 51);
    }

    #[test]
    fn test_no_header_mode() {
        let csv = CsvExporter::new().header(false).to_csv_string(&demo_series());
        assert!(csv.starts_with("100,"));
        assert_eq!(csv.lines().count(), 51);
    }

    #[test]
    fn test_file_name_convention() {
        assert_eq!(
            csv_file_name(CarProfile::FerrariSf23),
            "f1_aero_sim_Ferrari_SF-23.csv"
        );
        assert_eq!(
            csv_file_name(CarProfile::RedBullRb19),
            "f1_aero_sim_Red_Bull_RB19.csv"
        );
    }

    #[test]
    fn test_write_to_file() {
        let dir = std::env::temp_dir().join("fa_io_csv_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(csv_file_name(CarProfile::FerrariSf23));

        CsvExporter::new().write(&path, &demo_series()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(CSV_HEADER));
        std::fs::remove_dir_all(&dir).ok();
    }
}
