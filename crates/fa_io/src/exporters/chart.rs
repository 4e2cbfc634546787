// crates/fa_io/src/exporters/chart.rs

//! 图表栅格化边界
//!
//! 图表图像导出依赖外部渲染表面（展示层职责），这里只规定契约：
//! 输入是一个可栅格化的区域引用，输出是 PNG 编码的字节。
//! 渲染/栅格化的具体实现通过 [`ChartSurface`] trait 注入，
//! 本 crate 不包含任何编码器。
//!
//! 导出路径为 fire-and-forget：栅格化失败由调用方记录日志后
//! 静默放弃，无重试、无超时。

use fa_model::CarProfile;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// 导出文件名约定
pub fn png_file_name(car: CarProfile) -> String {
    format!("f1_aero_chart_{}.png", car.file_stem())
}

/// 可栅格化的图表区域
///
/// 展示层实现此 trait，将指定区域渲染为 PNG 编码字节。
pub trait ChartSurface {
    /// 将区域栅格化为 PNG 字节
    ///
    /// # 错误
    ///
    /// 渲染表面不可用或编码失败时返回
    /// [`IoError::RasterizeFailed`]。
    fn rasterize(&self) -> IoResult<Vec<u8>>;
}

/// 导出图表图像
///
/// 对栅格化结果做最小校验（非空）后原样返回字节。
///
/// # 错误
///
/// - [`IoError::RasterizeFailed`]: 表面栅格化失败或产出为空
pub fn export_chart_image(surface: &dyn ChartSurface) -> IoResult<Vec<u8>> {
    let bytes = surface.rasterize()?;
    if bytes.is_empty() {
        return Err(IoError::rasterize("渲染表面产出为空"));
    }
    debug!("图表栅格化完成: {} 字节", bytes.len());
    Ok(bytes)
}
