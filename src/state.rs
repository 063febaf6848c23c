use crate::config::DataConfig;
use crate::data::{load_json, DataDoc};
use crate::models::{
    schedule_for_estimate, EstimateSummary, FeeSchedule, FeeScheduleView, PermitCatalogView,
};
use tokio::sync::RwLock;
use tracing::{info, warn};

/// 共享状态: 启动时加载的两份数据快照 + 最近一次估算结果
pub struct AppState {
    /// 估算路径的费用表; `None` 表示加载失败
    pub fee_schedule: Option<FeeSchedule>,
    pub fee_view: FeeScheduleView,
    pub permit_view: PermitCatalogView,
    last_summary: RwLock<Option<EstimateSummary>>,
}

impl AppState {
    /// 并发读取两份数据文件, 各自独立失败
    ///
    /// 失败只记录警告; 信息区块改为显示提示文本。
    pub async fn load(data: &DataConfig) -> Self {
        let (fees, permits) = tokio::join!(
            load_json(&data.fee_schedule),
            load_json(&data.permit_catalog)
        );
        if let Err(e) = &fees {
            warn!("fees load failed: {}", e);
        }
        if let Err(e) = &permits {
            warn!("permits load failed: {}", e);
        }

        Self::from_results(
            DataDoc::from_result(&data.fee_schedule, fees),
            DataDoc::from_result(&data.permit_catalog, permits),
        )
    }

    /// 由已解析的文档构建 (估算路径只取可用的费用表)
    pub fn from_results(fees: DataDoc, permits: DataDoc) -> Self {
        let fee_schedule = match &fees {
            DataDoc::Ready(value) => schedule_for_estimate(Some(value)),
            DataDoc::Unavailable { .. } => None,
        };
        let fee_view = FeeScheduleView::resolve(&fees);
        let permit_view = PermitCatalogView::resolve(&permits);

        info!(
            "data loaded: fee schedule {}, permit catalog {}",
            if fee_schedule.is_some() { "ready" } else { "unavailable" },
            match permit_view {
                PermitCatalogView::Rows(ref rows) => format!("{} permits", rows.len()),
                PermitCatalogView::Unrecognized(_) => "unrecognized".to_string(),
                PermitCatalogView::Unavailable { .. } => "unavailable".to_string(),
            }
        );

        Self {
            fee_schedule,
            fee_view,
            permit_view,
            last_summary: RwLock::new(None),
        }
    }

    /// 保存最近一次估算 (覆盖, 不合并)
    pub async fn store_summary(&self, summary: EstimateSummary) {
        *self.last_summary.write().await = Some(summary);
    }

    pub async fn last_summary(&self) -> Option<EstimateSummary> {
        self.last_summary.read().await.clone()
    }
}
