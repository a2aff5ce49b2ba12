//! Feed-forward pair scorer deserialized from a model artifact.
//!
//! The network maps a concatenated drug pair (`2 * D` values) to a single
//! logit. Shapes are only checked when a forward pass runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime failure of a forward pass
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("shape mismatch in layer {layer}: expected {expected} inputs, got {actual}")]
    ShapeMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    #[error("layer {layer} has {weights} weight rows but {bias} bias terms")]
    BiasMismatch {
        layer: usize,
        weights: usize,
        bias: usize,
    },

    #[error("expected a scalar output, got {0} values")]
    OutputWidth(usize),

    #[error("non-finite output")]
    NonFinite,
}

/// Anything that can score a concatenated pair vector.
///
/// Implementations return the raw logit; callers apply the logistic function
/// and reject non-finite values.
pub trait InferenceModel: Send + Sync {
    fn forward(&self, input: &[f32]) -> Result<f64, InferenceError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Sigmoid,
    Tanh,
    #[default]
    Linear,
}

impl Activation {
    #[inline]
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::Linear => x,
        }
    }
}

/// Fully connected layer, weights row-major `out × in`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
    #[serde(default)]
    pub activation: Activation,
}

impl DenseLayer {
    fn forward(&self, layer: usize, input: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if self.bias.len() != self.weights.len() {
            return Err(InferenceError::BiasMismatch {
                layer,
                weights: self.weights.len(),
                bias: self.bias.len(),
            });
        }

        self.weights
            .iter()
            .zip(self.bias.iter())
            .map(|(row, bias)| {
                if row.len() != input.len() {
                    return Err(InferenceError::ShapeMismatch {
                        layer,
                        expected: row.len(),
                        actual: input.len(),
                    });
                }
                let z: f64 = row
                    .iter()
                    .zip(input.iter())
                    .map(|(w, x)| f64::from(*w) * x)
                    .sum::<f64>()
                    + f64::from(*bias);
                Ok(self.activation.apply(z))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseNetwork {
    pub layers: Vec<DenseLayer>,
}

impl DenseNetwork {
    #[must_use]
    pub fn new(layers: Vec<DenseLayer>) -> Self {
        Self { layers }
    }

    /// Width the first layer expects, if there is one
    #[must_use]
    pub fn input_dim(&self) -> Option<usize> {
        self.layers
            .first()
            .and_then(|layer| layer.weights.first())
            .map(Vec::len)
    }
}

impl InferenceModel for DenseNetwork {
    fn forward(&self, input: &[f32]) -> Result<f64, InferenceError> {
        let mut activations: Vec<f64> = input.iter().map(|x| f64::from(*x)).collect();
        for (idx, layer) in self.layers.iter().enumerate() {
            activations = layer.forward(idx, &activations)?;
        }

        match activations.as_slice() {
            [logit] => Ok(*logit),
            other => Err(InferenceError::OutputWidth(other.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(weights: Vec<Vec<f32>>, bias: Vec<f32>) -> DenseLayer {
        DenseLayer {
            weights,
            bias,
            activation: Activation::Linear,
        }
    }

    #[test]
    fn test_single_layer_logit() {
        let net = DenseNetwork::new(vec![linear(vec![vec![1.0, -1.0, 0.5, 2.0]], vec![0.25])]);
        let out = net.forward(&[1.0, 1.0, 2.0, 0.5]).unwrap();
        assert!((out - 2.25).abs() < 1e-9);
        assert_eq!(net.input_dim(), Some(4));
    }

    #[test]
    fn test_hidden_relu_layer() {
        let net = DenseNetwork::new(vec![
            DenseLayer {
                weights: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
                bias: vec![0.0, 0.0],
                activation: Activation::Relu,
            },
            linear(vec![vec![1.0, 1.0]], vec![0.0]),
        ]);
        // negative component is clipped by the relu
        let out = net.forward(&[3.0, -5.0]).unwrap();
        assert!((out - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_input_width_mismatch() {
        let net = DenseNetwork::new(vec![linear(vec![vec![1.0; 4]], vec![0.0])]);
        assert_eq!(
            net.forward(&[1.0, 2.0]),
            Err(InferenceError::ShapeMismatch { layer: 0, expected: 4, actual: 2 })
        );
    }

    #[test]
    fn test_bias_mismatch() {
        let net = DenseNetwork::new(vec![linear(vec![vec![1.0]], vec![0.0, 1.0])]);
        assert!(matches!(
            net.forward(&[1.0]),
            Err(InferenceError::BiasMismatch { .. })
        ));
    }

    #[test]
    fn test_vector_output_rejected() {
        let net = DenseNetwork::new(vec![linear(vec![vec![1.0], vec![1.0]], vec![0.0, 0.0])]);
        assert_eq!(net.forward(&[1.0]), Err(InferenceError::OutputWidth(2)));
    }

    #[test]
    fn test_deserialize_defaults_to_linear() {
        let net: DenseNetwork =
            serde_json::from_str(r#"{"layers":[{"weights":[[1.0]],"bias":[0.0]}]}"#).unwrap();
        assert_eq!(net.layers[0].activation, Activation::Linear);
    }
}
