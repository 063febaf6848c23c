//! 嵌入 iframe 时向父页面上报文档高度

use serde::Serialize;
use std::sync::LazyLock;

pub const HEIGHT_MESSAGE_TYPE: &str = "permitnow-height";

/// 发送给父窗口的消息: `{type: 'permitnow-height', value: <px>}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeightMessage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value: u32,
}

impl HeightMessage {
    pub fn new(value: u32) -> Self {
        Self {
            kind: HEIGHT_MESSAGE_TYPE,
            value,
        }
    }
}

static NOTIFIER_SCRIPT: LazyLock<String> = LazyLock::new(|| {
    let template =
        serde_json::to_string(&HeightMessage::new(0)).expect("height message serializes");
    format!(
        "(function(){{\
function postHeight(){{\
var m={template};\
m.value=document.documentElement.scrollHeight;\
if(window.parent&&window.parent!==window){{\
window.parent.postMessage(m,'*');\
}}\
}}\
window.addEventListener('load',postHeight);\
window.addEventListener('resize',postHeight);\
}})();"
    )
});

/// 页面脚本: load 与 resize 时测量高度, 仅在被嵌入时向父窗口 postMessage
///
/// 消息体由 `HeightMessage` 序列化得到, 只发不收。
pub fn notifier_script() -> &'static str {
    &NOTIFIER_SCRIPT
}
