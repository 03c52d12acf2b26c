/// Vertex shader: leaf sway about pivot and anchor, hover color selection
pub const TREE_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec3 a_color;
layout(location = 3) in vec3 a_hover_color;
layout(location = 4) in float a_part;
layout(location = 5) in vec3 a_pivot;
layout(location = 6) in vec3 a_anchor;
layout(location = 7) in float a_phase;

uniform mat4 u_view;
uniform mat4 u_projection;
uniform float u_time;
uniform uint u_hover_mask;
// (speed, amplitude)
uniform vec2 u_leaf_sway;
// (x speed, x amplitude, y speed, y amplitude)
uniform vec4 u_cluster_sway;

out vec3 v_world_position;
out vec3 v_normal;
out vec3 v_color;
out float v_two_sided;

const float LEAF_SLOT = 2.0;
const uint PICKABLE_SLOTS = 4u;

mat3 rotation_x(float a) {
    float c = cos(a);
    float s = sin(a);
    return mat3(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c);
}

mat3 rotation_y(float a) {
    float c = cos(a);
    float s = sin(a);
    return mat3(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c);
}

// Rodrigues rotation about a unit axis
mat3 rotation_axis(vec3 n, float a) {
    float c = cos(a);
    float s = sin(a);
    float t = 1.0 - c;
    return mat3(
        t * n.x * n.x + c, t * n.x * n.y + s * n.z, t * n.x * n.z - s * n.y,
        t * n.x * n.y - s * n.z, t * n.y * n.y + c, t * n.y * n.z + s * n.x,
        t * n.x * n.z + s * n.y, t * n.y * n.z - s * n.x, t * n.z * n.z + c);
}

void main() {
    vec3 position = a_position;
    vec3 normal = a_normal;
    bool is_leaf = abs(a_part - LEAF_SLOT) < 0.5;

    if (is_leaf) {
        // a leaf's normal is its local Z axis, so this rolls it in its own plane
        mat3 flutter = rotation_axis(normalize(a_normal), sin(u_time * u_leaf_sway.x + a_phase) * u_leaf_sway.y);
        position = a_pivot + flutter * (position - a_pivot);
        normal = flutter * normal;

        mat3 cluster = rotation_x(sin(u_time * u_cluster_sway.x + a_anchor.z) * u_cluster_sway.y)
                     * rotation_y(sin(u_time * u_cluster_sway.z + a_anchor.x) * u_cluster_sway.w);
        position = a_anchor + cluster * (position - a_anchor);
        normal = cluster * normal;
    }

    uint slot = uint(a_part + 0.5);
    bool hovered = slot < PICKABLE_SLOTS && (u_hover_mask & (1u << slot)) != 0u;

    v_world_position = position;
    v_normal = normal;
    v_color = hovered ? a_hover_color : a_color;
    v_two_sided = is_leaf ? 1.0 : 0.0;

    gl_Position = u_projection * u_view * vec4(position, 1.0);
}
"#;

/// Fragment shader: key, fill, hemisphere and ambient light with linear fog
pub const TREE_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

in vec3 v_world_position;
in vec3 v_normal;
in vec3 v_color;
in float v_two_sided;

uniform vec3 u_camera_pos;
uniform vec3 u_fog_color;
// (near, far)
uniform vec2 u_fog_range;

out vec4 fragColor;

const vec3 KEY_DIR = vec3(0.5122, 0.7682, 0.3841);
const vec3 KEY_COLOR = vec3(1.0, 0.973, 0.906);
const vec3 FILL_DIR = vec3(-0.4851, 0.7276, -0.4851);
const vec3 FILL_COLOR = vec3(0.529, 0.808, 0.922);
const vec3 AMBIENT = vec3(0.722, 0.831, 0.910);
const vec3 SKY = vec3(0.529, 0.808, 0.922);
const vec3 GROUND = vec3(0.176, 0.290, 0.176);

void main() {
    vec3 normal = normalize(v_normal);
    vec3 view_dir = normalize(u_camera_pos - v_world_position);
    if (v_two_sided > 0.5 && dot(normal, view_dir) < 0.0) {
        normal = -normal;
    }

    vec3 light = AMBIENT * 0.35;
    light += KEY_COLOR * 1.5 * max(dot(normal, KEY_DIR), 0.0);
    light += FILL_COLOR * 0.4 * max(dot(normal, FILL_DIR), 0.0);
    light += mix(GROUND, SKY, normal.y * 0.5 + 0.5) * 0.4;

    vec3 color = v_color * light;

    float distance = length(u_camera_pos - v_world_position);
    float fog = smoothstep(u_fog_range.x, u_fog_range.y, distance);
    color = mix(color, u_fog_color, fog);

    fragColor = vec4(color, 1.0);
}
"#;
