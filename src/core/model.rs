use glam::{Mat3, Mat4, Vec3};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("glTF contains no triangle primitives")]
    Empty,
    #[error("primitive {0} has no positions")]
    MissingPositions(usize),
    #[error("invalid image: {0}")]
    Image(#[from] image::ImageError),
}

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/// Flattened, world-space (model root space) triangle soup.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Import every triangle primitive reachable from the default scene of a
    /// binary glTF, with node transforms applied.
    pub fn from_glb(bytes: &[u8]) -> Result<Self, ModelError> {
        let gltf = gltf::Gltf::from_slice(bytes)?;
        let blob = gltf.blob.as_deref();
        let mut out = MeshData::default();
        let mut primitive_index = 0usize;

        let roots: Vec<gltf::Node> = match gltf.default_scene().or_else(|| gltf.scenes().next()) {
            Some(scene) => scene.nodes().collect(),
            None => gltf.nodes().collect(),
        };
        let mut stack: Vec<(gltf::Node, Mat4)> =
            roots.into_iter().map(|n| (n, Mat4::IDENTITY)).collect();

        while let Some((node, parent)) = stack.pop() {
            let local = Mat4::from_cols_array_2d(&node.transform().matrix());
            let world = parent * local;
            if let Some(mesh) = node.mesh() {
                for prim in mesh.primitives() {
                    if prim.mode() != gltf::mesh::Mode::Triangles {
                        continue;
                    }
                    out.append_primitive(&prim, blob, world, primitive_index)?;
                    primitive_index += 1;
                }
            }
            for child in node.children() {
                stack.push((child, world));
            }
        }

        if out.indices.is_empty() {
            return Err(ModelError::Empty);
        }
        log::info!(
            "[asset] imported {} vertices / {} triangles from {} primitives",
            out.vertices.len(),
            out.indices.len() / 3,
            primitive_index
        );
        Ok(out)
    }

    fn append_primitive(
        &mut self,
        prim: &gltf::Primitive,
        blob: Option<&[u8]>,
        world: Mat4,
        index: usize,
    ) -> Result<(), ModelError> {
        let reader = prim.reader(|buffer| match buffer.source() {
            gltf::buffer::Source::Bin => blob,
            gltf::buffer::Source::Uri(_) => None,
        });
        let positions: Vec<[f32; 3]> = reader
            .read_positions()
            .ok_or(ModelError::MissingPositions(index))?
            .collect();
        let indices: Vec<u32> = match reader.read_indices() {
            Some(ix) => ix.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        let normals: Vec<[f32; 3]> = match reader.read_normals() {
            Some(n) => n.collect(),
            None => compute_normals(&positions, &indices),
        };
        let color = prim
            .material()
            .pbr_metallic_roughness()
            .base_color_factor();

        let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
        let base = self.vertices.len() as u32;
        for (i, p) in positions.iter().enumerate() {
            let n = normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]);
            let wp = world.transform_point3(Vec3::from_array(*p));
            let wn = (normal_matrix * Vec3::from_array(n)).normalize_or_zero();
            self.vertices.push(MeshVertex {
                position: wp.to_array(),
                normal: wn.to_array(),
                color,
            });
        }
        let count = positions.len() as u32;
        self.indices.extend(
            indices
                .chunks_exact(3)
                .filter(|tri| tri.iter().all(|&i| i < count))
                .flatten()
                .map(|i| base + i),
        );
        Ok(())
    }

    /// Flat-shaded icosphere of radius 1. Each of the 20 base faces is split
    /// into `(detail + 1)^2` triangles; every triangle owns its three
    /// vertices so normals stay per face.
    pub fn icosahedron(detail: u32, color: [f32; 4]) -> Self {
        let t = (1.0 + 5f32.sqrt()) / 2.0;
        let corners = [
            Vec3::new(-1.0, t, 0.0),
            Vec3::new(1.0, t, 0.0),
            Vec3::new(-1.0, -t, 0.0),
            Vec3::new(1.0, -t, 0.0),
            Vec3::new(0.0, -1.0, t),
            Vec3::new(0.0, 1.0, t),
            Vec3::new(0.0, -1.0, -t),
            Vec3::new(0.0, 1.0, -t),
            Vec3::new(t, 0.0, -1.0),
            Vec3::new(t, 0.0, 1.0),
            Vec3::new(-t, 0.0, -1.0),
            Vec3::new(-t, 0.0, 1.0),
        ];
        const FACES: [[usize; 3]; 20] = [
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        let n = detail.saturating_add(1);
        let mut out = MeshData::default();
        for [ia, ib, ic] in FACES {
            let (a, b, c) = (corners[ia], corners[ib], corners[ic]);
            let at = |i: u32, j: u32| {
                let (fi, fj, fnn) = (i as f32, j as f32, n as f32);
                (a * (fnn - fi - fj) + b * fi + c * fj).normalize()
            };
            for i in 0..n {
                for j in 0..n - i {
                    out.push_flat([at(i, j), at(i + 1, j), at(i, j + 1)], color);
                    if i + j + 1 < n {
                        out.push_flat([at(i + 1, j), at(i + 1, j + 1), at(i, j + 1)], color);
                    }
                }
            }
        }
        out
    }

    /// Append one triangle facing away from the origin.
    fn push_flat(&mut self, tri: [Vec3; 3], color: [f32; 4]) {
        let [a, mut b, mut c] = tri;
        let mut normal = (b - a).cross(c - a).normalize_or_zero();
        if normal.dot(a + b + c) < 0.0 {
            std::mem::swap(&mut b, &mut c);
            normal = -normal;
        }
        for p in [a, b, c] {
            self.indices.push(self.vertices.len() as u32);
            self.vertices.push(MeshVertex {
                position: p.to_array(),
                normal: normal.to_array(),
                color,
            });
        }
    }

    /// Axis-aligned bounds as (min, max). `None` when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from_array(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

/// Area-weighted vertex normals for primitives that ship without them.
pub fn compute_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from_array(positions[a]);
        let pb = Vec3::from_array(positions[b]);
        let pc = Vec3::from_array(positions[c]);
        let face = (pb - pa).cross(pc - pa);
        acc[a] += face;
        acc[b] += face;
        acc[c] += face;
    }
    acc.into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO {
                [0.0, 1.0, 0.0]
            } else {
                n.to_array()
            }
        })
        .collect()
}

/// Decoded RGBA8 texture for a decal.
#[derive(Clone, Debug)]
pub struct DecalImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecalImage {
    /// Decode PNG, JPEG or WebP bytes into tightly packed RGBA8 rows.
    pub fn decode(bytes: &[u8]) -> Result<Self, ModelError> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }
}
