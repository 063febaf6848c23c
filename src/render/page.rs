use crate::host::notifier_script;
use crate::render::info::{render_contacts, render_contractors, render_fees, render_inspections};
use crate::state::AppState;

const PAGE_STYLE: &str = "body{font:14px/1.45 -apple-system,Segoe UI,Inter,Roboto,sans-serif;margin:16px;color:#111}\
section{margin:0 0 20px}\
.table{width:100%;border-collapse:collapse}\
.table th,.table td{padding:6px 8px;border-bottom:1px solid #e5e7eb;text-align:left}\
.sub{color:#555}\
.badge{background:#eef2ff;border-radius:4px;padding:1px 6px}\
pre.json{background:#f8fafc;padding:8px;overflow:auto}\
form label{display:block;margin:4px 0}";

/// 表单提交与打印按钮的浏览器端胶水代码
///
/// 请求失败时显示接口返回的 `error` 文本, 不启用打印按钮。
const ESTIMATOR_SCRIPT: &str = "(function(){\
var form=document.getElementById('estimator-form');\
var result=document.getElementById('estimator-result');\
var print=document.getElementById('btn-print');\
function showError(message){\
var box=document.createElement('div');\
box.className='sub';\
box.textContent=message;\
result.replaceChildren(box);\
}\
form.addEventListener('submit',function(e){\
e.preventDefault();\
fetch('api/estimate',{method:'POST',body:new URLSearchParams(new FormData(form))})\
.then(function(r){\
if(!r.ok){\
return r.json()\
.catch(function(){return {};})\
.then(function(body){showError(body.error||('Request failed ('+r.status+')'));});\
}\
return r.text().then(function(html){result.innerHTML=html;print.disabled=false;});\
})\
.catch(function(){showError('Request failed');});\
});\
print.addEventListener('click',function(){window.open('api/print','_blank');});\
})();";

const ESTIMATOR_FORM: &str = "<form id=\"estimator-form\">\
<label>Address <input id=\"addr\" name=\"addr\" type=\"text\"></label>\
<label>Valuation ($) <input id=\"valuation\" name=\"valuation\" type=\"number\" min=\"0\" step=\"any\"></label>\
<label>Project description <textarea id=\"desc\" name=\"desc\" rows=\"2\"></textarea></label>\
<label><input id=\"t-elec\" name=\"t-elec\" type=\"checkbox\"> Electrical</label>\
<label><input id=\"t-plum\" name=\"t-plum\" type=\"checkbox\"> Plumbing</label>\
<label><input id=\"t-hvac\" name=\"t-hvac\" type=\"checkbox\"> HVAC</label>\
<label>Recessed lights <input id=\"f-recess\" name=\"f-recess\" type=\"number\" min=\"0\"></label>\
<label>GFCI outlets <input id=\"f-gfci\" name=\"f-gfci\" type=\"number\" min=\"0\"></label>\
<label>Standard outlets <input id=\"f-outlet\" name=\"f-outlet\" type=\"number\" min=\"0\"></label>\
<label>Water lines <input id=\"f-water\" name=\"f-water\" type=\"number\" min=\"0\"></label>\
<button type=\"submit\">Estimate</button> \
<button type=\"button\" id=\"btn-print\" disabled>Print summary</button>\
</form>\
<div id=\"estimator-result\"></div>";

/// 完整页面: 估算表单 + 四个只读信息区块 + 高度上报脚本
pub fn render_page(state: &AppState) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
         <title>PermitNow</title><style>{style}</style></head><body>\
         <section id=\"estimator\"><h2>Fee Estimator</h2>{form}</section>\
         <section><h2>Fees</h2><div id=\"fees-content\">{fees}</div></section>\
         <section><h2>Inspections</h2><div id=\"inspections-content\">{inspections}</div></section>\
         <section><h2>Contractors</h2><div id=\"contractors-content\">{contractors}</div></section>\
         <section><h2>Contacts</h2><div id=\"contacts-content\">{contacts}</div></section>\
         <script>{estimator}</script><script>{notifier}</script>\
         </body></html>",
        style = PAGE_STYLE,
        form = ESTIMATOR_FORM,
        fees = render_fees(&state.fee_view),
        inspections = render_inspections(&state.permit_view),
        contractors = render_contractors(),
        contacts = render_contacts(),
        estimator = ESTIMATOR_SCRIPT,
        notifier = notifier_script(),
    )
}
