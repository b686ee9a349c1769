// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Login
            translations.insert("titulo", "Codex Configs");
            translations.insert("subtitulo", "Sign in to manage your API configurations");
            translations.insert("usuario", "Username");
            translations.insert("usuario_placeholder", "Enter your username");
            translations.insert("contrasena", "Password");
            translations.insert("contrasena_placeholder", "Enter your password");
            translations.insert("entrar", "Sign in");
            translations.insert("credenciales_invalidas", "Invalid credentials, please try again.");

            // Shell
            translations.insert("cerrar_sesion", "Log out");
            translations.insert("tab_configs", "Configs");
            translations.insert("tab_ejemplo", "Usage sample");
            translations.insert("nueva_config", "Add config");
            translations.insert("sin_configs", "No configurations yet.");

            // Tarjetas
            translations.insert("estado_activo", "Active");
            translations.insert("estado_inactivo", "Disabled");
            translations.insert("estado_desconocido", "Unknown");
            translations.insert("cambiar_estado", "Toggle status");
            translations.insert("copiar_url", "Copy URL");
            translations.insert("copiar_token", "Copy token");
            translations.insert("copiar", "Copy");

            // Modal de alta
            translations.insert("campo_nombre", "Name");
            translations.insert("campo_url", "Site URL");
            translations.insert("campo_base_url", "Base URL");
            translations.insert("campo_token", "API token");
            translations.insert("campo_origen", "Source (optional)");
            translations.insert("guardar", "Save");
            translations.insert("cancelar", "Cancel");
            translations.insert("cerrar", "Close");
            translations.insert("campos_obligatorios", "Please fill in every required field.");

            // Notificaciones
            translations.insert("alta_ok", "Config added");
            translations.insert("alta_error", "Could not add the config");
            translations.insert("estado_ok", "Status updated");
            translations.insert("estado_error", "Could not update the status");

            // Ejemplo
            translations.insert("ejemplo_titulo", "Using a config with the Codex CLI");
            translations.insert("ejemplo_config", "~/.codex/config.toml");
            translations.insert("ejemplo_auth", "~/.codex/auth.json");
            translations.insert("ejemplo_nota", "Replace the base URL and token with the values copied from a card.");
        }
        _ => {
            // ZH por defecto
            translations.insert("titulo", "Codex 配置");
            translations.insert("subtitulo", "登录以管理 API 配置");
            translations.insert("usuario", "用户名");
            translations.insert("usuario_placeholder", "请输入用户名");
            translations.insert("contrasena", "密码");
            translations.insert("contrasena_placeholder", "请输入密码");
            translations.insert("entrar", "登录");
            translations.insert("credenciales_invalidas", "凭证无效，请重试。");

            translations.insert("cerrar_sesion", "退出登录");
            translations.insert("tab_configs", "配置列表");
            translations.insert("tab_ejemplo", "使用示例");
            translations.insert("nueva_config", "新增配置");
            translations.insert("sin_configs", "暂无配置。");

            translations.insert("estado_activo", "启用");
            translations.insert("estado_inactivo", "停用");
            translations.insert("estado_desconocido", "未知");
            translations.insert("cambiar_estado", "切换状态");
            translations.insert("copiar_url", "复制 URL");
            translations.insert("copiar_token", "复制 Token");
            translations.insert("copiar", "复制");

            translations.insert("campo_nombre", "名称");
            translations.insert("campo_url", "站点 URL");
            translations.insert("campo_base_url", "Base URL");
            translations.insert("campo_token", "API Token");
            translations.insert("campo_origen", "来源（可选）");
            translations.insert("guardar", "保存");
            translations.insert("cancelar", "取消");
            translations.insert("cerrar", "关闭");
            translations.insert("campos_obligatorios", "请填写所有必填字段。");

            translations.insert("alta_ok", "配置已添加");
            translations.insert("alta_error", "添加配置失败");
            translations.insert("estado_ok", "状态已更新");
            translations.insert("estado_error", "更新状态失败");

            translations.insert("ejemplo_titulo", "在 Codex CLI 中使用配置");
            translations.insert("ejemplo_config", "~/.codex/config.toml");
            translations.insert("ejemplo_auth", "~/.codex/auth.json");
            translations.insert("ejemplo_nota", "将 Base URL 和 Token 替换为从配置卡片复制的值。");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave si no hay traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_uses_chinese() {
        assert_eq!(t("entrar", "FR"), t("entrar", "ZH"));
        assert_eq!(t("credenciales_invalidas", "zh"), "凭证无效，请重试。");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        assert_eq!(t("no_existe", "EN"), "no_existe");
    }

    #[test]
    fn both_languages_cover_the_same_keys() {
        let en = get_translations("EN");
        let zh = get_translations("ZH");
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut zh_keys: Vec<_> = zh.keys().collect();
        en_keys.sort();
        zh_keys.sort();
        assert_eq!(en_keys, zh_keys);
    }
}
